pub mod eigensolver;
pub mod error;
pub mod fit;
pub mod grid;
pub mod io;
pub mod numerovs;
pub mod potentials;
pub mod propagator;
pub mod stabilization;
pub mod utility;

pub extern crate faer;
