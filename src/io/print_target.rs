use enum_dispatch::enum_dispatch;
use std::fs::File;
use std::io::{stdout, Error, ErrorKind, Result, Write};

/// Container for managing multiple print targets
#[derive(Default)]
pub enum PrintTarget {
    #[default]
    Stdout,
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>), // Supports any stream that implements `Write`
    Sink,
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintTarget::Stdout => write!(f, "PrintTarget::Stdout"),
            PrintTarget::File(_) => write!(f, "PrintTarget::File"),
            PrintTarget::Buffer(_) => write!(f, "PrintTarget::Buffer"),
            PrintTarget::Stream(_) => write!(f, "PrintTarget::Stream"),
            PrintTarget::Sink => write!(f, "PrintTarget::Sink"),
        }
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match self {
            PrintTarget::Stdout => stdout().write(buf),
            PrintTarget::File(file) => file.write(buf),
            PrintTarget::Buffer(buffer) => {
                buffer.extend_from_slice(buf);
                Ok(buf.len())
            }
            PrintTarget::Stream(stream) => stream.write(buf),
            PrintTarget::Sink => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            PrintTarget::Stdout => stdout().flush(),
            PrintTarget::File(file) => file.flush(),
            PrintTarget::Stream(stream) => stream.flush(),
            PrintTarget::Buffer(_) | PrintTarget::Sink => Ok(()),
        }
    }
}

/// Trait implemented by solvers that allow configurable print targets
#[enum_dispatch]
pub trait ConfigurablePrintTarget {
    /// redirect print output to stdout
    fn print_to_stdout(&mut self);
    /// redirect print output to a file
    fn print_to_file(&mut self, file: std::fs::File);
    /// redirect print output to a stream
    fn print_to_stream(&mut self, stream: Box<dyn std::io::Write + Send + Sync>);
    /// redirect print output to an internal buffer
    fn print_to_buffer(&mut self);
    /// discard all print output
    fn print_to_sink(&mut self);
    /// get the contents of the internal print buffer
    fn get_print_buffer(&mut self) -> std::io::Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::Stdout;
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink;
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        match self {
            PrintTarget::Buffer(buffer) => Ok(String::from_utf8_lossy(buffer).to_string()),
            _ => Err(Error::new(
                ErrorKind::Other,
                "Print buffering is not configured.",
            )),
        }
    }
}

#[test]
fn test_print_buffer() {
    let mut target = PrintTarget::default();
    assert!(target.get_print_buffer().is_err());

    target.print_to_buffer();
    write!(target, "hello {}", 42).unwrap();
    assert_eq!(target.get_print_buffer().unwrap(), "hello 42");

    target.print_to_sink();
    writeln!(target, "dropped").unwrap();
    assert!(target.get_print_buffer().is_err());
}
