//! Linear model, the reference [`Fittable`] implementation.

use std::fmt;
use std::io::{self, Write};

use super::Fittable;

/// Message written on every call to [`LinearModel::fit`].
pub const FIT_MESSAGE: &str = "fitting linear model";

/// Concrete model implementation.
///
/// Fitting writes [`FIT_MESSAGE`] followed by a newline to the model's output,
/// which is stdout unless another writer is supplied.
pub struct LinearModel {
    out: Box<dyn Write + Send>,
    fitted: bool,
}

impl LinearModel {
    /// Create a model that reports to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a model that reports to `out`.
    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Box::new(out),
            fitted: false,
        }
    }

    /// Whether [`fit`](Fittable::fit) has completed on this instance.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl Default for LinearModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearModel")
            .field("fitted", &self.fitted)
            .finish_non_exhaustive()
    }
}

impl Fittable for LinearModel {
    fn fit(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "{}", FIT_MESSAGE)?;
        self.out.flush()?;
        self.fitted = true;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory writer for capturing model output.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_fit_writes_message() {
        let buf = SharedBuffer::default();
        let mut model = LinearModel::with_writer(buf.clone());
        assert!(!model.is_fitted());

        model.fit().unwrap();

        assert_eq!(buf.contents(), "fitting linear model\n");
        assert!(model.is_fitted());
    }

    #[test]
    fn test_fit_propagates_write_failure() {
        let mut model = LinearModel::with_writer(BrokenPipe);
        assert!(model.fit().is_err());
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_kind_names_concrete_type() {
        let model = LinearModel::new();
        assert!(model.kind().ends_with("LinearModel"));

        let boxed: Box<dyn Fittable> = Box::new(LinearModel::new());
        assert!(boxed.kind().ends_with("LinearModel"));
    }
}
