//! Static lecture catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Academic stage a lecture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Second-year curriculum.
    Second,
    /// Third-year curriculum.
    Third,
    /// Fourth-year curriculum.
    Fourth,
}

impl Stage {
    /// All stages in curriculum order.
    pub const ALL: [Self; 3] = [Self::Second, Self::Third, Self::Fourth];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Second => write!(f, "second"),
            Self::Third => write!(f, "third"),
            Self::Fourth => write!(f, "fourth"),
        }
    }
}

/// Identifies a lecture; its localized title and description hang off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum LectureId {
    IntroBiomedicalInstrumentation,
    MedicalInstrumentation,
    InstrumentClassification,
    PatientSafety,
    HospitalDesign,
    OperatingRoomDesign,
    Spectrophotometer,
    Ventilators,
    Defibrillators,
    RehabilitationEngineering,
    SurgicalRobotics,
}

/// A downloadable lecture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lecture {
    /// Lecture identifier.
    pub id: LectureId,
    /// Stage the lecture is taught in.
    pub stage: Stage,
    /// File name under the lectures directory.
    pub file_name: &'static str,
    /// English description sent for translation.
    pub content_en: &'static str,
}

/// Every lecture shipped with the application.
pub const LECTURES: [Lecture; 11] = [
    Lecture {
        id: LectureId::IntroBiomedicalInstrumentation,
        stage: Stage::Second,
        file_name: "intro_biomed_inst.pdf",
        content_en: "This lecture provides a comprehensive introduction to Biomedical Instrumentation. It covers the definition, the fundamental components of a generalized system (measurand, sensor, signal conditioning, display, etc.) with a block diagram, and the different types of instrumentation systems such as direct/indirect, invasive/non-invasive, and contact/remote.",
    },
    Lecture {
        id: LectureId::MedicalInstrumentation,
        stage: Stage::Second,
        file_name: "lab_medical_devices.pdf",
        content_en: "This lecture defines medical instrumentation as the use of technology to measure, record, and analyze biological signals for medical purposes. It covers the wide range of applications across medicine, including diagnostic, monitoring, therapeutic, and clinical laboratory uses. The lecture also outlines the key functions of these instruments, such as signal measurement, diagnosis through data analysis, and therapeutic intervention.",
    },
    Lecture {
        id: LectureId::InstrumentClassification,
        stage: Stage::Second,
        file_name: "classification_medical_instruments.pdf",
        content_en: "This lecture provides a comprehensive classification of medical instruments. It details several key categories, including: Diagnostic Instruments used to identify diseases (e.g., stethoscopes, ECGs); Surgical Instruments for procedures; Therapeutic Instruments for treatment (e.g., nebulizers, pacemakers); Monitoring Instruments for vital signs; Laboratory Instruments for sample analysis; and General Purpose Instruments like syringes and catheters.",
    },
    Lecture {
        id: LectureId::PatientSafety,
        stage: Stage::Second,
        file_name: "patient_safety.pdf",
        content_en: "This lecture covers the critical topic of Patient Safety. It defines the concept and explores key areas including error prevention and management, common types of medical errors (diagnostic, medication, surgical), and the establishment of safe practices like checklists and infection control. The role of patient-centered care, technological solutions such as EHRs, and global improvement initiatives are also discussed.",
    },
    Lecture {
        id: LectureId::HospitalDesign,
        stage: Stage::Second,
        file_name: "hospital_design.pdf",
        content_en: "This lecture covers the fundamental principles of hospital design. Key topics include functional zoning to improve workflow, enhancing the patient experience through a healing environment, and critical systems like infection control and emergency preparedness. It also details the essential electrical, plumbing, and fire safety systems required in a modern hospital.",
    },
    Lecture {
        id: LectureId::OperatingRoomDesign,
        stage: Stage::Second,
        file_name: "operating_room_design.pdf",
        content_en: "This lecture details the principles of Operating Room (OR) design. It covers crucial aspects such as infection control through airflow management, workflow efficiency, and safety protocols. Essential features like layout, lighting, and ventilation systems are discussed, along with modern considerations like technological integration and noise control. The lecture also touches on future trends, including hybrid ORs and robotic surgery setups.",
    },
    Lecture {
        id: LectureId::Spectrophotometer,
        stage: Stage::Second,
        file_name: "spectrophotometer.pdf",
        content_en: "This lecture covers the Spectrophotometer. It explains its definition as an instrument that measures light absorption, its working principle based on Beer-Lambert's Law, its main components (light source, monochromator, cuvette, detector), and the basic procedure for its use, including calibration and sample measurement.",
    },
    Lecture {
        id: LectureId::Ventilators,
        stage: Stage::Third,
        file_name: "therapeutic_devices_ventilators.pdf",
        content_en: "This lecture provides an in-depth look at mechanical ventilators. We will cover the different modes of ventilation, key parameters (like tidal volume, pressure, and flow), and the common alarms and troubleshooting procedures associated with their use in clinical settings.",
    },
    Lecture {
        id: LectureId::Defibrillators,
        stage: Stage::Third,
        file_name: "therapeutic_devices_defibrillators.pdf",
        content_en: "A detailed examination of defibrillators and pacemakers. This session explains the electrophysiology of cardiac arrhythmias, the principles of defibrillation, and the technology behind both external and implantable cardiac devices.",
    },
    Lecture {
        id: LectureId::RehabilitationEngineering,
        stage: Stage::Fourth,
        file_name: "rehabilitation_engineering.pdf",
        content_en: "This lecture explores the field of rehabilitation engineering. We will discuss the design and application of devices that assist individuals with disabilities, including prosthetic limbs, orthotics, TENS units for pain management, and advanced mobility aids.",
    },
    Lecture {
        id: LectureId::SurgicalRobotics,
        stage: Stage::Fourth,
        file_name: "advanced_surgical_robotics.pdf",
        content_en: "An introduction to the cutting-edge field of surgical robotics. This lecture focuses on systems like the da Vinci Surgical System, covering its components, degrees of freedom, and its impact on minimally invasive surgery. We will also touch on future trends in medical robotics.",
    },
];

/// Lectures taught in the given stage, in catalog order.
#[must_use]
pub fn lectures_for_stage(stage: Stage) -> Vec<&'static Lecture> {
    LECTURES.iter().filter(|l| l.stage == stage).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Stage::Second, 7 ; "second_stage")]
    #[test_case(Stage::Third, 2 ; "third_stage")]
    #[test_case(Stage::Fourth, 2 ; "fourth_stage")]
    fn test_lectures_per_stage(stage: Stage, expected: usize) {
        let lectures = lectures_for_stage(stage);
        assert_eq!(lectures.len(), expected);
        assert!(lectures.iter().all(|l| l.stage == stage));
    }

    #[test]
    fn test_file_names_are_unique() {
        let mut names: Vec<_> = LECTURES.iter().map(|l| l.file_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LECTURES.len());
    }
}
