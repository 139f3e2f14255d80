use std::fmt::Debug;

/// Forwards an error to the log without otherwise handling it.
///
/// Usable at the end of any `Result` chain (eyre or otherwise) where the caller
/// wants to keep going after a failure but still have it show up in the console.
pub trait TraceErr<T, E> {
    fn trace_err(self) -> Result<T, E>;
    fn trace_err_ok(self) -> Option<T>;
    /// Logs the error and falls back to `fallback`.
    fn trace_err_or(self, fallback: T) -> T;
}

impl<T, E> TraceErr<T, E> for Result<T, E>
where
    E: Debug,
{
    fn trace_err(self) -> Result<T, E> {
        self.inspect_err(|e| tracing::error!("{:?}", e))
    }

    fn trace_err_ok(self) -> Option<T> {
        self.trace_err().ok()
    }

    fn trace_err_or(self, fallback: T) -> T {
        self.trace_err().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod test {
    use super::TraceErr;

    #[test]
    fn falls_back_on_error() {
        let failed: Result<bool, &str> = Err("boom");
        assert!(!failed.trace_err_or(false));

        let worked: Result<bool, &str> = Ok(true);
        assert!(worked.trace_err_or(false));
        assert_eq!(Err::<u8, _>("nope").trace_err_ok(), None);
    }
}
