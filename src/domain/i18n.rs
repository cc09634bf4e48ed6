//! Localized UI strings.
//!
//! Every string the interface shows is a [`TextKey`]. Lookups are exhaustive
//! matches, so adding a key without translating it fails to compile.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{LectureId, Stage};

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic (right-to-left).
    #[default]
    Ar,
    /// English.
    En,
}

impl Language {
    /// Two-letter language code sent to the content service.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Returns the other language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }

    /// Whether text in this language reads right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Human-readable language name, used in content prompts.
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ar => "Arabic",
            Self::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Closed set of interface strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TextKey {
    AppTitle,
    AppSubtitle,
    All,
    SearchPlaceholder,
    Devices,
    NoDevices,
    BackToList,
    Retry,
    ErrorTitle,
    ErrorMessage,
    Language,
    ToggleTheme,
    ThemeLight,
    ThemeDark,
    Quit,
    Close,
    Search,
    Select,
    Scroll,

    ScientificBooks,
    ScientificBooksTitle,
    GlobalArticles,
    GlobalArticlesTitle,
    ConferencesAndExhibitions,
    ConferencesAndExhibitionsTitle,
    StudentHouse,
    StudentHouseTitle,
    StudentHouseSubtitle,

    LoadingCategories,
    LoadingDetails,
    LoadingBooks,
    LoadingBookDetails,
    LoadingArticles,
    LoadingConferences,

    PrincipleOfOperation,
    CommonMalfunctions,
    Fault,
    Solution,
    ImageLink,

    BookAuthor,
    BookSummary,
    FindOnline,
    ViewMore,
    ArticleAuthors,
    ArticleJournal,
    ReadArticle,
    ConferenceLocation,
    ConferenceDate,
    VisitWebsite,

    ProjectsSectionTitle,
    ComingSoon,
    LecturesSectionTitle,
    LecturesSectionDescription,
    CareerSectionTitle,
    Career1,
    Career2,
    Career3,

    LecturesListTitle,
    LecturesForStage,
    StageSecond,
    StageThird,
    StageFourth,
    OpenFile,
    DownloadFile,
    FileSaved,
    FileUnavailable,
    Translate,
    TranslationModalTitle,
    TranslatingMessage,

    LectureTitle(LectureId),
    LectureDescription(LectureId),
}

impl TextKey {
    /// Key naming the given stage.
    #[must_use]
    pub const fn stage(stage: Stage) -> Self {
        match stage {
            Stage::Second => Self::StageSecond,
            Stage::Third => Self::StageThird,
            Stage::Fourth => Self::StageFourth,
        }
    }
}

/// Looks up a string for the given language.
#[must_use]
pub const fn tr(language: Language, key: TextKey) -> &'static str {
    match language {
        Language::Ar => arabic(key),
        Language::En => english(key),
    }
}

/// Looks up a string and replaces `{{name}}` placeholders.
#[must_use]
pub fn tr_with(language: Language, key: TextKey, replacements: &[(&str, &str)]) -> String {
    let mut text = tr(language, key).to_string();
    for (name, value) in replacements {
        text = text.replace(&format!("{{{{{name}}}}}"), value);
    }
    text
}

const fn english(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "Biomedical Engineering Guide",
        TextKey::AppSubtitle => {
            "Explore medical devices, how they work and how to fix their common faults."
        }
        TextKey::All => "All",
        TextKey::SearchPlaceholder => "Search for a device...",
        TextKey::Devices => "Devices",
        TextKey::NoDevices => "No devices match your search.",
        TextKey::BackToList => "Back",
        TextKey::Retry => "Retry",
        TextKey::ErrorTitle => "Something went wrong",
        TextKey::ErrorMessage => "Failed to load content. Please try again.",
        TextKey::Language => "Language",
        TextKey::ToggleTheme => "Theme",
        TextKey::ThemeLight => "Light",
        TextKey::ThemeDark => "Dark",
        TextKey::Quit => "Quit",
        TextKey::Close => "Close",
        TextKey::Search => "Search",
        TextKey::Select => "Select",
        TextKey::Scroll => "Scroll",

        TextKey::ScientificBooks => "Scientific Books",
        TextKey::ScientificBooksTitle => "Recommended Scientific Books",
        TextKey::GlobalArticles => "Global Articles",
        TextKey::GlobalArticlesTitle => "Recent Global Articles",
        TextKey::ConferencesAndExhibitions => "Conferences & Exhibitions",
        TextKey::ConferencesAndExhibitionsTitle => "Upcoming Conferences & Exhibitions",
        TextKey::StudentHouse => "Student House",
        TextKey::StudentHouseTitle => "Student House",
        TextKey::StudentHouseSubtitle => "Resources to support your studies and career.",

        TextKey::LoadingCategories => "Loading device categories...",
        TextKey::LoadingDetails => "Loading details for {{device}}...",
        TextKey::LoadingBooks => "Loading scientific books...",
        TextKey::LoadingBookDetails => "Loading summary of \"{{title}}\"...",
        TextKey::LoadingArticles => "Loading global articles...",
        TextKey::LoadingConferences => "Loading conferences and exhibitions...",

        TextKey::PrincipleOfOperation => "Principle of Operation",
        TextKey::CommonMalfunctions => "Common Malfunctions",
        TextKey::Fault => "Fault",
        TextKey::Solution => "Solution",
        TextKey::ImageLink => "Image",

        TextKey::BookAuthor => "Author",
        TextKey::BookSummary => "Summary",
        TextKey::FindOnline => "Find online",
        TextKey::ViewMore => "View more",
        TextKey::ArticleAuthors => "Authors",
        TextKey::ArticleJournal => "Journal",
        TextKey::ReadArticle => "Read article",
        TextKey::ConferenceLocation => "Location",
        TextKey::ConferenceDate => "Date",
        TextKey::VisitWebsite => "Visit website",

        TextKey::ProjectsSectionTitle => "Graduation Projects",
        TextKey::ComingSoon => "Coming soon",
        TextKey::LecturesSectionTitle => "Lectures",
        TextKey::LecturesSectionDescription => "Browse lecture files for every stage.",
        TextKey::CareerSectionTitle => "Career Paths",
        TextKey::Career1 => "Clinical engineer in hospitals and medical centers",
        TextKey::Career2 => "Sales and application specialist for medical device companies",
        TextKey::Career3 => "Research and development in medical software and devices",

        TextKey::LecturesListTitle => "Choose a Stage",
        TextKey::LecturesForStage => "Lectures - {{stage}}",
        TextKey::StageSecond => "Second Stage",
        TextKey::StageThird => "Third Stage",
        TextKey::StageFourth => "Fourth Stage",
        TextKey::OpenFile => "Open",
        TextKey::DownloadFile => "Download",
        TextKey::FileSaved => "Saved to {{path}}",
        TextKey::FileUnavailable => "The lecture file is not available.",
        TextKey::Translate => "Translate",
        TextKey::TranslationModalTitle => "Arabic Translation",
        TextKey::TranslatingMessage => "Translating...",

        TextKey::LectureTitle(id) => english_lecture_title(id),
        TextKey::LectureDescription(id) => english_lecture_description(id),
    }
}

const fn english_lecture_title(id: LectureId) -> &'static str {
    match id {
        LectureId::IntroBiomedicalInstrumentation => "Introduction to Biomedical Instrumentation",
        LectureId::MedicalInstrumentation => "Medical Instrumentation and Its Applications",
        LectureId::InstrumentClassification => "Classification of Medical Instruments",
        LectureId::PatientSafety => "Patient Safety",
        LectureId::HospitalDesign => "Hospital Design",
        LectureId::OperatingRoomDesign => "Operating Room Design",
        LectureId::Spectrophotometer => "The Spectrophotometer",
        LectureId::Ventilators => "Therapeutic Devices: Mechanical Ventilators",
        LectureId::Defibrillators => "Therapeutic Devices: Defibrillators and Pacemakers",
        LectureId::RehabilitationEngineering => "Rehabilitation Engineering",
        LectureId::SurgicalRobotics => "Advanced Surgical Robotics",
    }
}

const fn english_lecture_description(id: LectureId) -> &'static str {
    match id {
        LectureId::IntroBiomedicalInstrumentation => {
            "Components of a generalized instrumentation system and its types."
        }
        LectureId::MedicalInstrumentation => {
            "Definition, applications and key functions of medical instruments."
        }
        LectureId::InstrumentClassification => {
            "Diagnostic, surgical, therapeutic, monitoring and laboratory instruments."
        }
        LectureId::PatientSafety => "Error prevention, safe practices and patient-centered care.",
        LectureId::HospitalDesign => "Functional zoning, infection control and building systems.",
        LectureId::OperatingRoomDesign => "Airflow, layout, lighting and hybrid operating rooms.",
        LectureId::Spectrophotometer => "Beer-Lambert law, components and measurement procedure.",
        LectureId::Ventilators => "Ventilation modes, key parameters, alarms and troubleshooting.",
        LectureId::Defibrillators => "Cardiac arrhythmias, defibrillation and implantable devices.",
        LectureId::RehabilitationEngineering => "Prosthetics, orthotics, TENS units and mobility aids.",
        LectureId::SurgicalRobotics => "The da Vinci system and minimally invasive surgery.",
    }
}

const fn arabic(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "دليل الهندسة الطبية",
        TextKey::AppSubtitle => "استكشف الأجهزة الطبية وطريقة عملها وكيفية إصلاح أعطالها الشائعة.",
        TextKey::All => "الكل",
        TextKey::SearchPlaceholder => "ابحث عن جهاز...",
        TextKey::Devices => "الأجهزة",
        TextKey::NoDevices => "لا توجد أجهزة مطابقة لبحثك.",
        TextKey::BackToList => "رجوع",
        TextKey::Retry => "إعادة المحاولة",
        TextKey::ErrorTitle => "حدث خطأ ما",
        TextKey::ErrorMessage => "فشل تحميل المحتوى. يرجى المحاولة مرة أخرى.",
        TextKey::Language => "اللغة",
        TextKey::ToggleTheme => "المظهر",
        TextKey::ThemeLight => "فاتح",
        TextKey::ThemeDark => "داكن",
        TextKey::Quit => "خروج",
        TextKey::Close => "إغلاق",
        TextKey::Search => "بحث",
        TextKey::Select => "اختيار",
        TextKey::Scroll => "تمرير",

        TextKey::ScientificBooks => "الكتب العلمية",
        TextKey::ScientificBooksTitle => "كتب علمية مقترحة",
        TextKey::GlobalArticles => "مقالات عالمية",
        TextKey::GlobalArticlesTitle => "أحدث المقالات العالمية",
        TextKey::ConferencesAndExhibitions => "المؤتمرات والمعارض",
        TextKey::ConferencesAndExhibitionsTitle => "المؤتمرات والمعارض القادمة",
        TextKey::StudentHouse => "بيت الطالب",
        TextKey::StudentHouseTitle => "بيت الطالب",
        TextKey::StudentHouseSubtitle => "موارد لدعم دراستك ومسيرتك المهنية.",

        TextKey::LoadingCategories => "جاري تحميل فئات الأجهزة...",
        TextKey::LoadingDetails => "جاري تحميل تفاصيل {{device}}...",
        TextKey::LoadingBooks => "جاري تحميل الكتب العلمية...",
        TextKey::LoadingBookDetails => "جاري تحميل ملخص \"{{title}}\"...",
        TextKey::LoadingArticles => "جاري تحميل المقالات العالمية...",
        TextKey::LoadingConferences => "جاري تحميل المؤتمرات والمعارض...",

        TextKey::PrincipleOfOperation => "مبدأ العمل",
        TextKey::CommonMalfunctions => "الأعطال الشائعة",
        TextKey::Fault => "العطل",
        TextKey::Solution => "الحل",
        TextKey::ImageLink => "الصورة",

        TextKey::BookAuthor => "المؤلف",
        TextKey::BookSummary => "الملخص",
        TextKey::FindOnline => "ابحث عنه على الإنترنت",
        TextKey::ViewMore => "عرض المزيد",
        TextKey::ArticleAuthors => "المؤلفون",
        TextKey::ArticleJournal => "المجلة",
        TextKey::ReadArticle => "اقرأ المقال",
        TextKey::ConferenceLocation => "المكان",
        TextKey::ConferenceDate => "التاريخ",
        TextKey::VisitWebsite => "زيارة الموقع",

        TextKey::ProjectsSectionTitle => "مشاريع التخرج",
        TextKey::ComingSoon => "قريباً",
        TextKey::LecturesSectionTitle => "المحاضرات",
        TextKey::LecturesSectionDescription => "تصفح ملفات المحاضرات لكل مرحلة.",
        TextKey::CareerSectionTitle => "المسارات المهنية",
        TextKey::Career1 => "مهندس سريري في المستشفيات والمراكز الطبية",
        TextKey::Career2 => "أخصائي مبيعات وتطبيقات في شركات الأجهزة الطبية",
        TextKey::Career3 => "البحث والتطوير في البرمجيات والأجهزة الطبية",

        TextKey::LecturesListTitle => "اختر المرحلة",
        TextKey::LecturesForStage => "محاضرات {{stage}}",
        TextKey::StageSecond => "المرحلة الثانية",
        TextKey::StageThird => "المرحلة الثالثة",
        TextKey::StageFourth => "المرحلة الرابعة",
        TextKey::OpenFile => "فتح",
        TextKey::DownloadFile => "تنزيل",
        TextKey::FileSaved => "تم الحفظ في {{path}}",
        TextKey::FileUnavailable => "ملف المحاضرة غير متوفر.",
        TextKey::Translate => "ترجمة",
        TextKey::TranslationModalTitle => "الترجمة العربية",
        TextKey::TranslatingMessage => "جاري الترجمة...",

        TextKey::LectureTitle(id) => arabic_lecture_title(id),
        TextKey::LectureDescription(id) => arabic_lecture_description(id),
    }
}

const fn arabic_lecture_title(id: LectureId) -> &'static str {
    match id {
        LectureId::IntroBiomedicalInstrumentation => "مقدمة في الأجهزة الطبية الحيوية",
        LectureId::MedicalInstrumentation => "الأجهزة الطبية وتطبيقاتها",
        LectureId::InstrumentClassification => "تصنيف الأجهزة الطبية",
        LectureId::PatientSafety => "سلامة المريض",
        LectureId::HospitalDesign => "تصميم المستشفيات",
        LectureId::OperatingRoomDesign => "تصميم غرف العمليات",
        LectureId::Spectrophotometer => "جهاز المطياف الضوئي",
        LectureId::Ventilators => "الأجهزة العلاجية: أجهزة التنفس الاصطناعي",
        LectureId::Defibrillators => "الأجهزة العلاجية: مزيلات الرجفان ومنظمات ضربات القلب",
        LectureId::RehabilitationEngineering => "هندسة التأهيل",
        LectureId::SurgicalRobotics => "الروبوتات الجراحية المتقدمة",
    }
}

const fn arabic_lecture_description(id: LectureId) -> &'static str {
    match id {
        LectureId::IntroBiomedicalInstrumentation => "مكونات نظام القياس العام وأنواعه.",
        LectureId::MedicalInstrumentation => "تعريف الأجهزة الطبية وتطبيقاتها ووظائفها الأساسية.",
        LectureId::InstrumentClassification => "الأجهزة التشخيصية والجراحية والعلاجية والمخبرية.",
        LectureId::PatientSafety => "منع الأخطاء والممارسات الآمنة والرعاية المتمحورة حول المريض.",
        LectureId::HospitalDesign => "التقسيم الوظيفي ومكافحة العدوى وأنظمة المبنى.",
        LectureId::OperatingRoomDesign => "تدفق الهواء والتخطيط والإضاءة وغرف العمليات الهجينة.",
        LectureId::Spectrophotometer => "قانون بير-لامبرت والمكونات وطريقة القياس.",
        LectureId::Ventilators => "أنماط التنفس والمعاملات الأساسية والإنذارات.",
        LectureId::Defibrillators => "اضطرابات نظم القلب وإزالة الرجفان والأجهزة المزروعة.",
        LectureId::RehabilitationEngineering => "الأطراف الصناعية والجبائر وأجهزة التحفيز والتنقل.",
        LectureId::SurgicalRobotics => "نظام دافنشي والجراحة طفيفة التوغل.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_arabic() {
        assert_eq!(Language::default(), Language::Ar);
        assert!(Language::Ar.is_rtl());
        assert!(!Language::En.is_rtl());
    }

    #[test]
    fn test_toggle_twice_restores() {
        for language in [Language::Ar, Language::En] {
            assert_eq!(language.toggled().toggled(), language);
            assert_ne!(language.toggled(), language);
        }
    }

    #[test]
    fn test_replacements() {
        let text = tr_with(Language::En, TextKey::LoadingDetails, &[("device", "ECG")]);
        assert_eq!(text, "Loading details for ECG...");

        let text = tr_with(
            Language::Ar,
            TextKey::LoadingBookDetails,
            &[("title", "Medical Physics")],
        );
        assert!(text.contains("Medical Physics"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn test_unknown_placeholder_is_left_alone() {
        let text = tr_with(Language::En, TextKey::LecturesForStage, &[("device", "x")]);
        assert_eq!(text, "Lectures - {{stage}}");
    }

    #[test]
    fn test_stage_keys() {
        assert_eq!(tr(Language::En, TextKey::stage(Stage::Third)), "Third Stage");
        assert_eq!(
            tr(Language::Ar, TextKey::stage(Stage::Fourth)),
            "المرحلة الرابعة"
        );
    }
}
