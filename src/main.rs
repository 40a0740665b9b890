use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    let mut args = env::args().skip(1);
    let input_dir = match args.next() {
        Some(arg) => PathBuf::from(arg),
        None => {
            eprintln!("usage: mcarptif_bin <input_dir> <output_dir>");
            process::exit(1);
        }
    };
    let output_dir = match args.next() {
        Some(arg) => PathBuf::from(arg),
        None => {
            eprintln!("usage: mcarptif_bin <input_dir> <output_dir>");
            process::exit(1);
        }
    };

    if let Err(e) = mcarptif::run_batch(&input_dir, &output_dir) {
        eprintln!("fatal: {e}");
        process::exit(1);
    }
}
