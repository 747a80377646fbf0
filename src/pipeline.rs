use serde::Serialize;

use crate::classifier::{ClassifierService, ModelLoader};
use crate::error::PipelineError;
use crate::history::{ScanHistory, ScanRecord};
use crate::label::Label;
use crate::preprocess::{Image, ImagePreprocessor};
use crate::report::ReportSynthesizer;

pub const DEFAULT_PATIENT_NAME: &str = "Not Provided";

/// Result of one successful classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub label: Label,
    pub confidence: f64,
    pub report: String,
    pub filename: String,
}

/// Image bytes in, recorded report out.
///
/// `run` is safe to call from many threads at once: the classifier loads at
/// most once and history insertion is atomic. A failing stage returns before
/// anything is recorded.
pub struct ClassificationPipeline<L: ModelLoader> {
    preprocessor: ImagePreprocessor,
    classifier: ClassifierService<L>,
    synthesizer: ReportSynthesizer,
    history: ScanHistory,
}

impl<L: ModelLoader> ClassificationPipeline<L> {
    pub fn new(loader: L) -> Self {
        ClassificationPipeline {
            preprocessor: ImagePreprocessor::default(),
            classifier: ClassifierService::new(loader),
            synthesizer: ReportSynthesizer::new(),
            history: ScanHistory::new(),
        }
    }

    pub fn classifier(&self) -> &ClassifierService<L> {
        &self.classifier
    }

    pub fn history(&self) -> &ScanHistory {
        &self.history
    }

    /// Runs the pipeline. A blank `patient_name` is recorded as "Not Provided".
    pub fn run(&self, image: &Image, patient_name: &str) -> Result<PipelineOutput, PipelineError> {
        let tensor = self.preprocessor.preprocess(image)?;
        self.classifier.ensure_initialized()?;
        let result = self.classifier.classify(&tensor)?;

        let patient_name = match patient_name.trim() {
            "" => DEFAULT_PATIENT_NAME,
            name => name,
        };
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let report = self.synthesizer.synthesize(result.label, result.confidence, patient_name, &timestamp);

        self.history.record(ScanRecord {
            filename: image.filename.clone(),
            filepath: image.stored_path.as_ref().map(|p| p.display().to_string()),
            patient_name: patient_name.to_owned(),
            timestamp,
            label: result.label,
            confidence: result.confidence,
            report: report.clone(),
        });
        log::info!(
            "Classified {} as {} ({:.4})",
            image.filename,
            result.label,
            result.confidence
        );

        Ok(PipelineOutput {
            label: result.label,
            confidence: result.confidence,
            report,
            filename: image.filename.clone(),
        })
    }
}
