//! Command-line driver: execute a drawing script and write PNG snapshots.

use std::{env, fs, process};

use rasterpad::script::Interpreter;
use rasterpad::Result;

fn main() {
    let mut args = env::args().skip(1);
    let (Some(script_path), Some(output_dir)) = (args.next(), args.next()) else {
        eprintln!("usage: rasterpad <script> <output-dir>");
        process::exit(2);
    };

    if let Err(err) = run(&script_path, &output_dir) {
        eprintln!("rasterpad: {err}");
        process::exit(1);
    }
}

fn run(script_path: &str, output_dir: &str) -> Result<()> {
    fs::create_dir_all(output_dir)?;
    let source = fs::read_to_string(script_path)?;
    let mut interpreter = Interpreter::new(output_dir)?;
    interpreter.run(&source)
}
