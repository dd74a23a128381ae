//! Core state for the N-body simulation
//!
//! [`System`] stores the bodies as parallel containers: positions,
//! velocities, masses, and names, all indexed consistently. Index `i`
//! refers to the same physical body in every container and across steps;
//! every mutation here edits all containers together so that invariant
//! can never break.

use nalgebra::Vector3;

use crate::error::{Error, Result};

pub type NVec3 = Vector3<f64>;

/// Ordered collection of gravitating bodies plus the simulation time `t`.
///
/// A body with `m == 0` is a test particle: it feels gravity from massive
/// bodies but exerts none itself.
#[derive(Debug, Clone, Default)]
pub struct System {
    pub x: Vec<NVec3>, // positions
    pub v: Vec<NVec3>, // velocities
    pub m: Vec<f64>,   // masses, non-negative
    pub names: Vec<String>,
    pub t: f64, // time
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Append a body to all parallel containers.
    /// Negative mass is a configuration error.
    pub fn add_body(
        &mut self,
        name: impl Into<String>,
        x: NVec3,
        v: NVec3,
        m: f64,
    ) -> Result<()> {
        let name = name.into();
        if m < 0.0 || !m.is_finite() {
            return Err(Error::NegativeMass { name, mass: m });
        }
        self.x.push(x);
        self.v.push(v);
        self.m.push(m);
        self.names.push(name);
        Ok(())
    }

    /// Remove a body by name from all parallel containers.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        let i = self
            .names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::UnknownBody { name: name.to_string() })?;
        self.x.remove(i);
        self.v.remove(i);
        self.m.remove(i);
        self.names.remove(i);
        Ok(())
    }

    /// Number of bodies with strictly positive mass.
    pub fn massive_count(&self) -> usize {
        self.m.iter().filter(|&&m| m > 0.0).count()
    }

    /// Shift the system into the barycentric frame: after the call the
    /// center of mass sits at the origin with zero net momentum.
    /// No-op for a system with zero total mass.
    pub fn center_of_mass_correction(&mut self) {
        let total: f64 = self.m.iter().sum();
        if total <= 0.0 {
            return;
        }

        let mut x_com = NVec3::zeros();
        let mut v_com = NVec3::zeros();
        for i in 0..self.len() {
            x_com += self.m[i] * self.x[i];
            v_com += self.m[i] * self.v[i];
        }
        x_com /= total;
        v_com /= total;

        for i in 0..self.len() {
            self.x[i] -= x_com;
            self.v[i] -= v_com;
        }
    }

    /// False once a degenerate step has propagated NaN or infinity into
    /// positions or velocities.
    pub fn is_finite(&self) -> bool {
        self.x.iter().all(|x| x.iter().all(|c| c.is_finite()))
            && self.v.iter().all(|v| v.iter().all(|c| c.is_finite()))
    }
}
