//! # UltraHonk External Backend
//!
//! Verifies proofs by invoking the Barretenberg `bb` binary:
//!
//! ```text
//! bb verify --scheme ultra_honk --oracle_hash keccak -k <vk> -p <proof>
//! ```
//!
//! Each call stages the proof bytes in a private temporary directory and
//! reads the verdict from the exit status. Nothing is shared between
//! concurrent verifications — there is no fixed scratch path through which
//! one submission's proof could leak into another's check.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::traits::{ProofVerifier, VerifyError};
use crate::variant::ProofVariant;

/// Proof verifier backed by the external `bb` binary.
///
/// Holds the binary path and the directory containing the four variant
/// verification keys (`vk_no_grade_no_major` .. `vk_yes_grade_yes_major`).
#[derive(Debug, Clone)]
pub struct UltraHonkVerifier {
    bb_bin: PathBuf,
    vk_dir: PathBuf,
}

impl UltraHonkVerifier {
    pub fn new(bb_bin: impl Into<PathBuf>, vk_dir: impl Into<PathBuf>) -> Self {
        Self {
            bb_bin: bb_bin.into(),
            vk_dir: vk_dir.into(),
        }
    }

    fn vk_path(&self, variant: ProofVariant) -> Result<PathBuf, VerifyError> {
        let path = self.vk_dir.join(variant.vk_filename());
        if !path.is_file() {
            return Err(VerifyError::MalformedArtifact(format!(
                "verification key not found: {}",
                path.display()
            )));
        }
        Ok(path)
    }

    fn run_bb(&self, vk: &Path, proof: &Path) -> Result<bool, VerifyError> {
        let status = Command::new(&self.bb_bin)
            .arg("verify")
            .args(["--scheme", "ultra_honk"])
            .args(["--oracle_hash", "keccak"])
            .arg("-k")
            .arg(vk)
            .arg("-p")
            .arg(proof)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| {
                VerifyError::Unavailable(format!("{}: {e}", self.bb_bin.display()))
            })?;
        Ok(status.success())
    }
}

impl ProofVerifier for UltraHonkVerifier {
    fn verify(&self, proof: &[u8], variant: ProofVariant) -> Result<bool, VerifyError> {
        let vk = self.vk_path(variant)?;

        let workdir = tempfile::tempdir()?;
        let proof_path = workdir.path().join("proof");
        fs::write(&proof_path, proof)?;

        let verdict = self.run_bb(&vk, &proof_path)?;
        tracing::debug!(%variant, verdict, proof_len = proof.len(), "bb verify completed");
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_vk_is_a_malformed_artifact_error() {
        let dir = tempfile::tempdir().unwrap();
        let verifier = UltraHonkVerifier::new("/usr/bin/true", dir.path());
        let err = verifier
            .verify(b"proof", ProofVariant::EnrollmentOnly)
            .unwrap_err();
        assert!(matches!(err, VerifyError::MalformedArtifact(_)));
    }

    #[test]
    fn missing_binary_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        for v in [
            ProofVariant::EnrollmentOnly,
            ProofVariant::MajorOnly,
            ProofVariant::GradeOnly,
            ProofVariant::GradeAndMajor,
        ] {
            std::fs::write(dir.path().join(v.vk_filename()), b"vk").unwrap();
        }
        let verifier = UltraHonkVerifier::new("/nonexistent/bb", dir.path());
        let err = verifier
            .verify(b"proof", ProofVariant::GradeAndMajor)
            .unwrap_err();
        assert!(matches!(err, VerifyError::Unavailable(_)));
    }

    #[test]
    fn exit_status_is_the_verdict() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ProofVariant::EnrollmentOnly.vk_filename()),
            b"vk",
        )
        .unwrap();

        // `true` and `false` stand in for the bb binary: the verdict is the
        // exit status, not parsed output.
        let accepting = UltraHonkVerifier::new("/usr/bin/true", dir.path());
        assert!(accepting.verify(b"p", ProofVariant::EnrollmentOnly).unwrap());

        let rejecting = UltraHonkVerifier::new("/usr/bin/false", dir.path());
        assert!(!rejecting.verify(b"p", ProofVariant::EnrollmentOnly).unwrap());
    }
}
