//! Print the UZI data of certificates
//!
//! Usage: `print-uzi [--types ZNM] [--roles 01.,30.] FILE...`
//!
//! Files are read as PEM, or as DER when they look like it. Each certificate is checked
//! against a strict-CA policy built from `--types` and `--roles`.

use std::env;
use std::io;
use uzi_reader::prelude::*;

fn print_record(record: &UziRecord) {
    println!("  {}", record);
    for (field, value) in record.iter() {
        println!("    {:<17} {}", field, value.unwrap_or("<none>"));
    }
    if let Some(desc) = card_type_description(record.card_type()) {
        println!("    card type: {}", desc);
    }
    if let Some(desc) = role_description(record.role()) {
        println!("    role: {}", desc);
    }
    if let Some(desc) = ca_description(record.oid_ca()) {
        println!("    CA: {}", desc);
    }
}

fn read_record(data: &[u8]) -> UziResult<UziRecord> {
    let read = |kind: UziKind| {
        if matches!((data.first(), data.get(1)), (Some(0x30), Some(0x81..=0x83))) {
            // probably DER
            UziRecord::from_der(kind, Verification::Success, Some(data))
        } else {
            let text = String::from_utf8_lossy(data);
            UziRecord::from_pem(kind, Verification::Success, Some(&text))
        }
    };
    match read(UziKind::PassUser) {
        Err(UziError::CardTypeNotUser(_)) => read(UziKind::Generic),
        res => res,
    }
}

pub fn main() -> io::Result<()> {
    let mut config = PolicyConfig::new(true);
    let mut files = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--types" => {
                let types = args.next().unwrap_or_default();
                config = config.allow_types(types.chars().map(String::from));
            }
            "--roles" => {
                let roles = args.next().unwrap_or_default();
                config = config.allow_roles(roles.split(',').filter(|r| !r.is_empty()));
            }
            _ => files.push(arg),
        }
    }
    let validator = PolicyValidator::new(config);

    for file_name in files {
        println!("File: {}", file_name);
        let data = std::fs::read(&file_name)?;
        match read_record(&data) {
            Ok(record) => {
                print_record(&record);
                match validator.validate(Some(&record)) {
                    Ok(()) => println!("  policy: accepted"),
                    Err(e) => println!("  policy: rejected ({})", e),
                }
            }
            Err(e) => println!("  not an UZI certificate: {} [{}]", e, e.family()),
        }
    }
    Ok(())
}
