//! Print lattice counts of Reeve tetrahedra next to their closed forms.
//!
//! Usage:
//!   cargo run -p reeve --example ehrhart_table -- 8
//!
//! For each r in 1..=R prints the Z³/Z_2 counts, the Reeve-formula volume and
//! the first few Ehrhart values (counted vs polynomial).

use reeve::api::{count_dilate, ehrhart_reeve, ClassifyCfg, ReeveCheck};

fn main() {
    let max_r: u32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(6);
    let cfg = ClassifyCfg::default();
    println!("r  I1 B1 I2 B2  V(formula)  V(exact)  L(1..3) counted / polynomial");
    for r in 1..=max_r.max(1) {
        let check = match ReeveCheck::run(r, cfg) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("r={r}: {e}");
                continue;
            }
        };
        let mut counted = Vec::new();
        let mut poly = Vec::new();
        for t in 1..=3u32 {
            if let Ok(c) = count_dilate(r, t, cfg) {
                counted.push(c.closed().to_string());
            }
            poly.push(ehrhart_reeve(r, t as i64).to_string());
        }
        println!(
            "{r:<2} {:<2} {:<2} {:<2} {:<3} {:<11.6} {:<9.6} {} / {}",
            check.z1.interior,
            check.z1.boundary,
            check.z2.interior,
            check.z2.boundary,
            check.volume_formula,
            check.volume_exact,
            counted.join(","),
            poly.join(","),
        );
    }
}
