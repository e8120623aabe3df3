use billow::{
    export, Deliver, Destination, FileSink, InvoiceDocument, LayoutConfig, PipelineError,
};
use std::env;
use std::fs;
use std::path::PathBuf;

/// A simple CLI to compose a paginated invoice PDF from a JSON document.
fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "billow=info");
        }
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Compose a paginated invoice PDF from a JSON document.");
        eprintln!();
        eprintln!("Usage: {} <path/to/invoice.json> <output-dir>", args[0]);
        std::process::exit(1);
    }

    let invoice_path = &args[1];
    let output_dir = PathBuf::from(&args[2]);

    println!("Loading invoice from {}", invoice_path);
    let json = fs::read_to_string(invoice_path)?;
    let doc: InvoiceDocument = serde_json::from_str(&json)?;

    let artifact = export(&doc, &LayoutConfig::default())?;
    FileSink.deliver(
        &artifact.bytes,
        &artifact.file_name,
        &Destination::LocalDir(output_dir.clone()),
    )?;

    println!(
        "Successfully generated {}",
        output_dir.join(&artifact.file_name).display()
    );
    Ok(())
}
