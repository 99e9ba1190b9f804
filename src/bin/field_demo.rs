use std::io;

fn main() -> io::Result<()> {
    em_vectors::demo::run_demo(&mut io::stdout().lock())
}
