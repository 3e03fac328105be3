//! Interactive menu for storing DNA sequences and printing their Huffman codes.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use dna_huffman::{HuffmanCodec, SequenceStore, StoreConfig};

struct Shell<R, W> {
    input: R,
    output: W,
    store: SequenceStore,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    fn new(input: R, output: W, store: SequenceStore) -> Self {
        Shell { input, output, store }
    }

    /// Next whitespace-trimmed line, or `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_index(&mut self, message: &str) -> io::Result<Option<usize>> {
        Ok(self
            .prompt(message)?
            .map(|line| line.parse().unwrap_or(0)))
    }

    fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n--- DNA Sequence Menu ---")?;
            writeln!(self.output, "1. Add DNA Sequence")?;
            writeln!(self.output, "2. View DNA Sequences")?;
            writeln!(self.output, "3. Compress DNA Sequences")?;
            writeln!(self.output, "4. Delete DNA Sequence")?;
            writeln!(self.output, "5. Exit")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.add()?,
                "2" => self.view()?,
                "3" => self.compress()?,
                "4" => self.delete()?,
                "5" => {
                    writeln!(self.output, "Exiting the program.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please enter a valid option.")?,
            }
        }
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(sequence) = self.prompt("Enter the new DNA sequence data (A, T, G, C): ")? else {
            return Ok(());
        };
        match self.store.add(sequence) {
            Ok(_) => writeln!(self.output, "DNA sequence added successfully."),
            Err(e) => writeln!(self.output, "Could not add sequence: {e}."),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        writeln!(self.output, "List of DNA Sequences:")?;
        for (index, sequence) in self.store.list() {
            writeln!(self.output, "{}. {}", index, String::from_utf8_lossy(sequence))?;
        }
        Ok(())
    }

    fn view(&mut self) -> io::Result<()> {
        self.list()
    }

    fn compress(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.output, "No DNA sequences to compress.");
        }
        self.list()?;

        let Some(index) = self.prompt_index("Enter the index of the DNA sequence to compress: ")?
        else {
            return Ok(());
        };
        let codec = match self.store.get(index) {
            Ok(sequence) => HuffmanCodec::from_bytes(sequence),
            Err(_) => {
                return writeln!(self.output, "Invalid index or no DNA sequences to compress.");
            }
        };

        match codec {
            Ok(codec) => {
                writeln!(self.output, "Huffman Codes for the selected DNA Sequence:")?;
                for line in codec.code_table().lines() {
                    writeln!(self.output, "{line}")?;
                }
                let original = codec.frequencies().total() * 8;
                writeln!(
                    self.output,
                    "Encoded size: {} bits (original {} bits)",
                    codec.encoded_bits(),
                    original
                )
            }
            Err(e) => {
                log::error!("compression failed: {e}");
                writeln!(self.output, "Compression failed: {e}.")
            }
        }
    }

    fn delete(&mut self) -> io::Result<()> {
        let Some(index) = self.prompt_index("Enter the index of the DNA sequence to delete: ")?
        else {
            return Ok(());
        };
        match self.store.remove(index) {
            Ok(_) => writeln!(self.output, "DNA sequence deleted successfully."),
            Err(_) => writeln!(self.output, "Invalid index or no DNA sequences to delete."),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let store = match StoreConfig::from_env().and_then(|config| SequenceStore::new(&config)) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("sequence store capacity {}", store.capacity());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), store);
    if let Err(e) = shell.run() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(script: &str, capacity: usize) -> String {
        let store = SequenceStore::new(&StoreConfig::default().with_capacity(capacity)).unwrap();
        let mut out = Vec::new();
        Shell::new(script.as_bytes(), &mut out, store).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_view_compress() {
        let out = run("1\nATGCATGC\n2\n3\n1\n5\n", 10);
        assert!(out.contains("DNA sequence added successfully."));
        assert!(out.contains("1. ATGCATGC"));
        assert!(out.contains("Huffman Codes for the selected DNA Sequence:"));
        assert!(out.contains("A: 00\nC: 01\nG: 10\nT: 11\n"));
        assert!(out.contains("Encoded size: 16 bits (original 64 bits)"));
        assert!(out.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn test_compress_empty_store() {
        let out = run("3\n5\n", 10);
        assert!(out.contains("No DNA sequences to compress."));
    }

    #[test]
    fn test_invalid_indices() {
        let out = run("1\nAAT\n3\n7\n4\nx\n5\n", 10);
        assert!(out.contains("Invalid index or no DNA sequences to compress."));
        assert!(out.contains("Invalid index or no DNA sequences to delete."));
    }

    #[test]
    fn test_delete_and_full_store() {
        let out = run("1\nA\n1\nT\n4\n1\n2\n5\n", 1);
        assert!(out.contains("Could not add sequence: maximum number of sequences reached (1)."));
        assert!(out.contains("DNA sequence deleted successfully."));
        assert!(!out.contains("1. A\n"));
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let out = run("9\n", 10);
        assert!(out.contains("Invalid choice. Please enter a valid option."));
    }
}
