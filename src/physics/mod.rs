pub mod aerodynamics;
