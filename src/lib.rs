//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# sevlog

sevlog prints severity-tagged, timestamped lines to stdout and helps you find out where you are
in the call stack.

# The line

Every line looks like

```text
[2016/11/08 22:00:00.000] INFO: 3 of 4 shards up
```

with the severity label colored for the terminal.  That's it: no rotation, no JSON, no remote
shipping, no buffering.  One line per call, straight to stdout.

# Severities

| Macro      | Label   | Printed when       |
|------------|---------|--------------------|
| `debug!`   | `DEBUG` | `DEBUG` is set     |
| `network!` | `NET`   | `DEBUG` is set     |
| `sql!`     | `SQL`   | `SQL_LOG` is set   |
| `info!`    | `INFO`  | always             |
| `warning!` | `WARN`  | always             |
| `error!`   | `ERROR` | always             |
| `fatal!`   | `ERROR` | always, then halts |

An environment variable counts as set when it holds a non-empty value.

# Loggers

All switches live in a [Logger]: the [Config] toggles (including a master switch that silences
everything), the [clock::Clock] that stamps lines, the [Sink] they go to, and the [Halt] policy
for fatal lines, which by default exits the process with status 1.  The macros use a
process-wide default built from the environment unless you hand them a logger:

```rust
use sevlog::{Config, InMemorySink, Logger};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let logger = Logger::new(Config::from_env().with_sql(true)).with_sink(sink.clone());

sevlog::sql!(logger: &logger, "SELECT * FROM jobs WHERE id = {}", 23);
assert!(sink.drain_logs().contains("SELECT * FROM jobs WHERE id = 23"));
```

# Errors across a service boundary

[Logger::rpc_error] logs a failure and returns an [RpcError] that only carries detail when
`DEBUG` is set, so production callers never see internals.

# Where am I?

[callstack::caller_name] and [callstack::call_stack] walk the current thread's stack with the
platform's symbolication.  Both report failures as errors; `call_stack` keeps whatever it
collected before failing.
*/

mod color;
mod config;
mod level;
mod logger;
mod log_record;
mod sink;
mod stdout_sink;
mod inmemory_sink;
mod rpc;
mod macros;
pub mod clock;
pub mod callstack;
pub mod global_logger;

pub use color::{Color, RESET};
pub use config::{Config, DEBUG_VAR, SQL_LOG_VAR};
pub use level::Level;
pub use logger::{FATAL_EXIT_CODE, FATAL_MESSAGE, Halt, Logger};
pub use log_record::LogRecord;
pub use sink::Sink;
pub use stdout_sink::StdoutSink;
pub use inmemory_sink::InMemorySink;
pub use rpc::{GENERIC_RPC_MESSAGE, RpcError};
pub use global_logger::{global_logger, set_global_logger};
