//! Provincial dealer-license verification capability trait.
//!
//! Verification against the provincial registries (OMVIC, AMVIC, VSA)
//! is not implemented; [`StubLicenseVerifier`] reports every license as
//! unverified. The dealership-create handler records the outcome without
//! gating on it, so a real registry client can be swapped in behind the
//! same trait.

use async_trait::async_trait;

/// Outcome of a dealer-license check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseVerification {
    /// `"verified"` or `"unverified"`.
    pub status: String,
    /// Machine-readable reason for the status.
    pub reason: String,
}

/// Checks a dealer license number against a provincial registry.
#[async_trait]
pub trait LicenseVerifier: Send + Sync {
    async fn verify_dealer_license(
        &self,
        province: &str,
        license_number: &str,
    ) -> LicenseVerification;
}

/// No-op verifier that reports every license as unverified.
#[derive(Debug, Default)]
pub struct StubLicenseVerifier;

#[async_trait]
impl LicenseVerifier for StubLicenseVerifier {
    async fn verify_dealer_license(
        &self,
        province: &str,
        license_number: &str,
    ) -> LicenseVerification {
        tracing::debug!(%province, %license_number, "Stub license verification");
        LicenseVerification {
            status: "unverified".to_string(),
            reason: "not_implemented".to_string(),
        }
    }
}
