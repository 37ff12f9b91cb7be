use anyhow::Result;
use binary_rw::{BinaryReader, BinaryWriter, Endian, FileStream, OpenType};
use clap::{arg, command, Command};

use huffpack::EncodingContext;

// Container layout: magic, 32-bit blob length, blob bytes.
const MAGIC: [u8; 4] = *b"HUF1";

fn main() -> Result<()> {
    let matches = command!()
        .subcommand_required(true)
        .subcommand(
            Command::new("compress")
                .arg(arg!(input: <INPUT> "Text file to compress"))
                .arg(arg!(output: <OUTPUT> "Container file to write")),
        )
        .subcommand(
            Command::new("decompress")
                .arg(arg!(input: <INPUT> "Container file to read"))
                .arg(arg!(output: [OUTPUT] "Text file to write; prints to stdout when omitted")),
        )
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("compress") {
        let input = matches.get_one::<String>("input").unwrap();
        let output = matches.get_one::<String>("output").unwrap();
        compress_file(input, output)?;
    } else if let Some(matches) = matches.subcommand_matches("decompress") {
        let input = matches.get_one::<String>("input").unwrap();
        let output = matches.get_one::<String>("output");
        decompress_file(input, output.map(String::as_str))?;
    }

    Ok(())
}

fn compress_file(input: &str, output: &str) -> Result<()> {
    let text = std::fs::read_to_string(input)?;

    let mut context = EncodingContext::new();
    context.compress(&text)?;
    let blob = context.to_blob()?;

    let mut stream = FileStream::new(output, OpenType::OpenAndCreate)?;
    let mut writer = BinaryWriter::new(&mut stream, Endian::Big);
    for byte in MAGIC {
        writer.write_u8(byte)?;
    }
    writer.write_u32(blob.len() as u32)?;
    for byte in &blob {
        writer.write_u8(*byte)?;
    }

    println!(
        "Compressed {} symbols into {} bytes",
        text.chars().count(),
        blob.len() + 8
    );
    Ok(())
}

fn decompress_file(input: &str, output: Option<&str>) -> Result<()> {
    let mut stream = FileStream::new(input, OpenType::Open)?;
    let mut reader = BinaryReader::new(&mut stream, Endian::Big);

    let mut magic = [0u8; 4];
    for byte in magic.iter_mut() {
        *byte = reader.read_u8()?;
    }
    if magic != MAGIC {
        anyhow::bail!("{input} is not a huffpack container");
    }

    let length = reader.read_u32()? as usize;
    let mut blob = Vec::with_capacity(length);
    for _ in 0..length {
        blob.push(reader.read_u8()?);
    }

    let context = EncodingContext::from_blob(&blob)?;
    let text = context.decode()?;

    match output {
        Some(path) => std::fs::write(path, &text)?,
        None => println!("{text}"),
    }

    Ok(())
}
