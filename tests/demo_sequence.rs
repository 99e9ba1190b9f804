use approx::assert_relative_eq;

use em_vectors::demo::run_demo;
use em_vectors::laws::{ampere_long_wire, gauss_point_charge};

fn scalar_from_line(line: &str, prefix: &str, suffix: &str) -> f64 {
    let rest = line.strip_prefix(prefix).expect("line prefix");
    let value = rest.strip_suffix(suffix).expect("line suffix");
    value.parse().expect("scalar value")
}

#[test]
fn demo_transcript_matches_fixed_sequence() {
    let mut out = Vec::new();
    run_demo(&mut out).expect("writing to a Vec cannot fail");
    let transcript = String::from_utf8(out).expect("utf-8 transcript");
    let lines: Vec<&str> = transcript.lines().collect();

    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "Initial Field Values:");
    assert_eq!(lines[1], "components: (0, 100000, 1000)");
    assert_eq!(lines[2], "components: (0.001, 0, 0.002)");
    assert_eq!(lines[3], "");

    let e = scalar_from_line(
        lines[4],
        "Electric Field calculated using Gauss' Law: ",
        " N/C",
    );
    assert_relative_eq!(e, gauss_point_charge(1.0e-6, 0.1), max_relative = 1.0e-12);

    let b = scalar_from_line(
        lines[5],
        "Magnetic Field calculated using Ampere's Law: ",
        " T",
    );
    assert_relative_eq!(b, ampere_long_wire(10.0, 0.1), max_relative = 1.0e-12);

    assert_eq!(lines[6], "");
    assert_eq!(lines[7], "Combined Electric Field e3 = e1 + e2:");
    assert_eq!(lines[8], "Electric Field Components: (100, 100200, 1300)");
    assert_eq!(lines[9], "Combined Magnetic Field b3 = b1 + b2:");
    assert_eq!(lines[10], "Magnetic Field Components: (0.003, 0.001, 0.005)");
}
