pub mod ethics;
pub mod initializers;
pub mod origins;
pub mod portraits;

use super::fields::FieldSpec;

pub const KEY: FieldSpec = FieldSpec::single("key");
pub const ETHIC: FieldSpec = FieldSpec::multi("ethic");
pub const ORIGIN: FieldSpec = FieldSpec::single("origin");
pub const INITIALIZER: FieldSpec = FieldSpec::single("initializer").allowing_empty();
pub const PORTRAIT: FieldSpec = FieldSpec::single("portrait");

pub const SPECIES: &str = "species";
pub const SECONDARY_SPECIES: &str = "secondary_species";

// ── Tests ──
