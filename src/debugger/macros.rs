// Component-tagged logging, gated by the global debug level and emitted as tracing events.

#[macro_export]
macro_rules! db_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::debugger::should_log($level) {
            match $level {
                $crate::debugger::DebugLevel::Error => {
                    $crate::tracing::error!(component = $component, "{}", format!($($arg)*))
                }
                $crate::debugger::DebugLevel::Warn => {
                    $crate::tracing::warn!(component = $component, "{}", format!($($arg)*))
                }
                $crate::debugger::DebugLevel::Info => {
                    $crate::tracing::info!(component = $component, "{}", format!($($arg)*))
                }
                $crate::debugger::DebugLevel::Debug => {
                    $crate::tracing::debug!(component = $component, "{}", format!($($arg)*))
                }
                $crate::debugger::DebugLevel::Trace => {
                    $crate::tracing::trace!(component = $component, "{}", format!($($arg)*))
                }
                $crate::debugger::DebugLevel::Off => {}
            }
        }
    };
}

#[macro_export]
macro_rules! db_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::DebugLevel::Error, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::DebugLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::DebugLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::DebugLevel::Debug, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::debugger::DebugLevel::Trace, $component, $($arg)*)
    };
}
