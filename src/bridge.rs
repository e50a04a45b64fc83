use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::engine::Sweeper;
use crate::region::ClearRequest;

/// Delivers the reply for one handled action. Fires exactly once, from
/// whatever thread the host's background executor uses.
pub type ResultCallback = Box<dyn FnOnce(Result<Value, String>) + Send + 'static>;

/// Script-bridge entry point: maps action names and a JSON args array onto
/// the engine, offloading all filesystem work to the host's background
/// executor.
pub struct Bridge {
    sweeper: Arc<Sweeper>,
}

impl Bridge {
    pub fn new(sweeper: Arc<Sweeper>) -> Self {
        Self { sweeper }
    }

    /// Dispatch one action. Returns `false` for an unrecognized action, in
    /// which case the callback is never invoked.
    pub fn execute(&self, action: &str, args: &Value, callback: ResultCallback) -> bool {
        match action {
            "clearCache" => {
                self.run_clear(ClearRequest::defaults(), ClearWording::All, callback);
                true
            }
            "clearCacheSelective" => {
                // Options bag is the first args element; anything malformed
                // just selects nothing.
                let options = args.get(0).cloned().unwrap_or(Value::Null);
                let request = ClearRequest::from_options(&options);
                self.run_clear(request, ClearWording::Selective, callback);
                true
            }
            "getCacheInfo" => {
                let sweeper = self.sweeper.clone();
                let host = sweeper.ctx().host.clone();
                host.run_background(Box::new(move || {
                    let reply = serde_json::to_value(sweeper.cache_info())
                        .map_err(|e| format!("Error getting cache info: {e}"));
                    callback(reply);
                }));
                true
            }
            _ => {
                debug!(action, "unhandled action");
                false
            }
        }
    }

    fn run_clear(&self, request: ClearRequest, wording: ClearWording, callback: ResultCallback) {
        let sweeper = self.sweeper.clone();
        let host = sweeper.ctx().host.clone();
        host.run_background(Box::new(move || {
            let outcome = sweeper.clear(&request);
            let reply = if outcome.ok() {
                Ok(Value::String(wording.success().to_string()))
            } else {
                Err(format!("{}{}", wording.error_prefix(), outcome.error_message()))
            };
            callback(reply);
        }));
    }
}

#[derive(Clone, Copy)]
enum ClearWording {
    All,
    Selective,
}

impl ClearWording {
    fn success(self) -> &'static str {
        match self {
            ClearWording::All => {
                "Cache cleared successfully (databases and preferences preserved)"
            }
            ClearWording::Selective => "Selected cache cleared successfully",
        }
    }

    fn error_prefix(self) -> &'static str {
        match self {
            ClearWording::All => "Error clearing cache: ",
            ClearWording::Selective => "Error clearing selective cache: ",
        }
    }
}
