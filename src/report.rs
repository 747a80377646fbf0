use crate::label::Label;

const NO_TUMOR_RECOMMENDATIONS: &str = "\
- No signs of tumor detected
- Regular check-ups recommended
- Maintain healthy lifestyle
- Follow-up scan in 12 months";

const ESCALATION_RECOMMENDATIONS: &str = "\
- Immediate consultation with neurologist recommended
- Further diagnostic tests may be required
- Regular monitoring and follow-up essential
- Consider additional imaging studies
- Develop treatment plan with healthcare team";

const DISCLAIMER: &str =
    "Note: This is an AI-generated report and should be reviewed by a qualified medical professional.";

/// Renders the plain-text report attached to each scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportSynthesizer;

impl ReportSynthesizer {
    pub fn new() -> Self {
        ReportSynthesizer
    }

    pub fn synthesize(&self, label: Label, confidence: f64, patient_name: &str, timestamp: &str) -> String {
        let mut report = format!(
            "BRAIN TUMOR DETECTION REPORT\n\
             Generated on: {timestamp}\n\
             \n\
             PATIENT INFORMATION\n\
             Patient Name: {patient_name}\n\
             \n\
             ANALYSIS RESULTS\n\
             Scan Type: MRI Brain Scan\n\
             Detection: {label}\n\
             Confidence: {confidence}\n\
             \n\
             MEDICAL RECOMMENDATIONS\n",
            confidence = format_percent(confidence),
        );

        if label.is_tumor() {
            report.push_str(&format!(
                "- {} tumor detected with {} confidence\n",
                label.display_name(),
                format_percent(confidence)
            ));
            report.push_str(ESCALATION_RECOMMENDATIONS);
        } else {
            report.push_str(NO_TUMOR_RECOMMENDATIONS);
        }

        report.push_str("\n\n");
        report.push_str(DISCLAIMER);
        report
    }
}

/// `0.94` -> `94.00%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2026-10-16 09:30:00";

    #[test]
    fn tumor_report_names_type_and_confidence() {
        let report = ReportSynthesizer::new().synthesize(Label::Glioma, 0.94, "Jane Roe", TS);
        assert!(report.starts_with("BRAIN TUMOR DETECTION REPORT\nGenerated on: 2026-10-16 09:30:00\n"));
        assert!(report.contains("Patient Name: Jane Roe"));
        assert!(report.contains("- Glioma tumor detected with 94.00% confidence"));
        assert!(report.contains("Immediate consultation with neurologist recommended"));
        assert!(report.ends_with(DISCLAIMER));
    }

    #[test]
    fn underscores_are_spaced_in_tumor_names() {
        let report = ReportSynthesizer::new().synthesize(Label::Meningioma, 0.5, "P", TS);
        assert!(report.contains("- Meningioma tumor detected with 50.00% confidence"));
    }

    #[test]
    fn no_tumor_report_never_escalates() {
        for confidence in [0.0, 0.31, 0.999, 1.0] {
            let report = ReportSynthesizer::new().synthesize(Label::NoTumor, confidence, "P", TS);
            assert!(report.contains("- No signs of tumor detected"));
            assert!(report.contains("- Follow-up scan in 12 months"));
            assert!(!report.contains("neurologist"));
            assert!(!report.contains("tumor detected with"));
            assert!(report.ends_with(DISCLAIMER));
        }
    }

    #[test]
    fn every_tumor_label_escalates() {
        for label in Label::ALL.into_iter().filter(Label::is_tumor) {
            let report = ReportSynthesizer::new().synthesize(label, 0.8125, "P", TS);
            assert!(report.contains("81.25%"), "{}", label);
            assert!(report.contains(ESCALATION_RECOMMENDATIONS), "{}", label);
        }
    }

    #[test]
    fn synthesis_is_deterministic() {
        let s = ReportSynthesizer::new();
        assert_eq!(
            s.synthesize(Label::Pituitary, 0.66, "A", TS),
            s.synthesize(Label::Pituitary, 0.66, "A", TS)
        );
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(0.94), "94.00%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
