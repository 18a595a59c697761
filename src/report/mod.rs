pub mod fingerprint;
pub mod histogram;
pub mod inspect;
