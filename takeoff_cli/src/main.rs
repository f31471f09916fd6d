//! # Takeoff CLI
//!
//! Command-line front end for the estimation engine. Reads a JSON
//! calculation request (a file path argument, or stdin when no argument is
//! given), prints the material list as a table, and emits the full result
//! as JSON for piping into other tools.
//!
//! ## Usage
//!
//! ```text
//! takeoff request.json
//! cat request.json | takeoff
//! ```

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use takeoff_core::building::CalculationRequest;
use takeoff_core::estimate::{estimate_with, EstimateOptions};

fn read_request_body() -> io::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut body = String::new();
            io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

fn main() -> ExitCode {
    let body = match read_request_body() {
        Ok(body) => body,
        Err(e) => {
            eprintln!("Error reading request: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let request = match CalculationRequest::from_json(&body) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return ExitCode::FAILURE;
        }
    };

    let result = estimate_with(request.house_type, &request.spec, &EstimateOptions::default());

    println!("Takeoff - Building Material Estimate");
    println!("====================================");
    println!();
    println!("House type:  {}", result.selections.house_type);
    println!("Foundation:  {}", result.selections.foundation_type);
    println!("Roof:        {}", result.selections.roof_type);
    if let Some(material) = &result.selections.roof_material {
        println!("Roof cover:  {}", material);
    }
    if let Some(basement) = &result.selections.basement {
        match &basement.wall_material {
            Some(material) => println!("Basement:    {} walls", material),
            None => println!("Basement:    yes"),
        }
    }
    println!();
    println!("{:<28} {:>14} {:>6}", "Material", "Quantity", "Unit");
    println!("{:-<28} {:->14} {:->6}", "", "", "");
    for item in &result.items {
        println!(
            "{:<28} {:>14.2} {:>6}",
            item.material, item.quantity, item.unit
        );
    }

    println!();
    println!("JSON Output:");
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
