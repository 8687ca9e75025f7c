use std::env;
use std::process;

use zenconvolve::{ConvolveError, FilterJob, NamedKernel, Unstoppable};

fn usage(program: &str) -> String {
    let mut text = format!("{program} input-bmp-image output kernel\n\nSupported kernels:\n");
    for kernel in NamedKernel::ALL {
        text.push_str("  ");
        text.push_str(kernel.name());
        text.push('\n');
    }
    text
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("zenconvolve", String::as_str);

    if let [_, flag] = args.as_slice() {
        if flag == "--help" || flag == "-h" {
            print!("{}", usage(program));
            return;
        }
    }

    if let Err(err) = run(&args) {
        log::debug!("failed: {err:?}");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), ConvolveError> {
    let [_, input, output, kernel] = args else {
        return Err(ConvolveError::Usage(
            "zenconvolve <input-image> <output> <kernel>".into(),
        ));
    };
    FilterJob::from_kernel_name(input, output, kernel)?.run(Unstoppable)
}
