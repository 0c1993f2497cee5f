//! xprvec Particle Integration Example
//!
//! This example advances a charged particle through uniform electric and
//! magnetic fields with explicit Euler steps. It demonstrates:
//! - Fused element-wise updates with scalar broadcasting
//! - Compound assignment from expressions
//! - The eager cross product and the Euclidean norm
//! - Conditional selection for a reflecting floor
//! - Checked construction from runtime slices

use xprvec::prelude::*;

type Vec3 = Vector<f64, 3>;

const CHARGE_TO_MASS: f64 = 0.5;
const RESTITUTION: f64 = 0.8;
const DT: f64 = 0.01;
const STEPS: usize = 500;

fn main() -> Result<(), XprError> {
    println!("{}", "=".repeat(80));
    println!("xprvec Particle Integration Example");
    println!("{}", "=".repeat(80));
    println!();

    example_1_load_state()?;
    example_2_integrate()?;

    Ok(())
}

/// Example 1: Checked Construction
/// Runtime data is checked against the compile-time dimension
fn example_1_load_state() -> Result<(), XprError> {
    println!("Example 1: Checked Construction");
    println!("{}", "-".repeat(80));

    let raw = [0.0, 0.0, 1.0, 1.0, 0.0, 0.5];
    let position = Vec3::from_slice(&raw[..3])?;
    let velocity = Vec3::from_slice(&raw[3..])?;
    println!("position = {:?}", position.as_array());
    println!("velocity = {:?}", velocity.as_array());

    match Vec3::from_slice(&raw[..2]) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("short slice rejected: {err}"),
    }
    println!();

    Ok(())
}

/// Example 2: Lorentz Force Integration
/// Each update is a single fused pass over three elements
fn example_2_integrate() -> Result<(), XprError> {
    println!("Example 2: Lorentz Force Integration");
    println!("{}", "-".repeat(80));

    let electric = Vec3::new([0.0, 0.0, -1.0]);
    let magnetic = Vec3::new([0.0, 0.0, 2.0]);

    let mut position = Vec3::new([0.0, 0.0, 1.0]);
    let mut velocity = Vec3::new([1.0, 0.0, 0.5]);
    let mut bounces = 0;

    for step in 0..STEPS {
        // a = (q/m) (E + v x B)
        let turning = cross(&velocity, &magnetic);
        let acceleration = (CHARGE_TO_MASS * (&electric + &turning)).materialize();

        velocity += &acceleration * DT;
        position += &velocity * DT;

        // Reflect off the z = 0 plane, damping the normal component.
        if position[2] < 0.0 {
            bounces += 1;
            let normal = Vector::new([false, false, true]);
            let reflected = select(&normal, -&velocity * RESTITUTION, &velocity).materialize();
            velocity = reflected;
            position[2] = -position[2];
        }

        if step % 100 == 0 {
            println!(
                "step {step:>4}: |v| = {:.4}, height = {:.4}",
                norm2(&velocity),
                position[2]
            );
        }
    }

    let extremum = maximum(abs(&position)).map(|found| found.index);
    println!();
    println!("final position = {:?}", position.as_array());
    println!("bounces        = {bounces}");
    println!("largest axis   = {extremum:?}");
    println!("no NaN         = {}", all_elements(eq(&position, &position)));

    Ok(())
}
