//! Fixed demonstration sequence: construct sample fields, print them,
//! evaluate both field laws, then add and print the combined fields.

use std::io::{self, Write};

use crate::fields::{ElectricFieldVector, MagneticFieldVector};

/// Runs the demonstration sequence, writing the transcript to `w`.
///
/// # Errors
/// Propagates any I/O error from the writer.
pub fn run_demo<W: Write>(w: &mut W) -> io::Result<()> {
    let mut e1 = ElectricFieldVector::new(0.0, 1.0e5, 1.0e3);
    let mut b1 = MagneticFieldVector::new(1.0e-3, 0.0, 2.0e-3);

    writeln!(w, "Initial Field Values:")?;
    writeln!(w, "{}", e1.vector().component_line())?;
    writeln!(w, "{}", b1.vector().component_line())?;

    let charge = 1.0e-6; // C
    let distance = 0.1; // m
    e1.calculate_field(charge, distance);
    writeln!(
        w,
        "\nElectric Field calculated using Gauss' Law: {} N/C",
        e1.calculated_e()
    )?;

    let current = 10.0; // A
    b1.calculate_field(current, distance);
    writeln!(
        w,
        "Magnetic Field calculated using Ampere's Law: {} T",
        b1.calculated_b()
    )?;

    let e2 = ElectricFieldVector::new(1.0e2, 2.0e2, 3.0e2);
    let e3 = e1.add(&e2);

    let b2 = MagneticFieldVector::new(2.0e-3, 1.0e-3, 3.0e-3);
    let b3 = b1.add(&b2);

    writeln!(w, "\nCombined Electric Field e3 = e1 + e2:\n{}", e3.format())?;
    writeln!(w, "Combined Magnetic Field b3 = b1 + b2:\n{}", b3.format())?;

    Ok(())
}
