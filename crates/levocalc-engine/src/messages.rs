//! Locale-keyed display strings.
//!
//! One static catalog per locale, handed to each stage explicitly. Nothing in
//! here is ever used to pick a branch.

use levocalc_core::dose_options::DoseStrength;
use levocalc_core::locale::Locale;

/// Title and message shown for one contraindication.
#[derive(Debug)]
pub struct Finding {
    pub title: &'static str,
    pub message: &'static str,
}

/// Regimen text for one renal band, per starting strength.
#[derive(Debug)]
pub struct BandRegimens {
    pub mg750: &'static str,
    pub mg500: &'static str,
    pub mg250: &'static str,
}

impl BandRegimens {
    pub fn for_dose(&self, dose: DoseStrength) -> &'static str {
        match dose {
            DoseStrength::Mg750 => self.mg750,
            DoseStrength::Mg500 => self.mg500,
            DoseStrength::Mg250 => self.mg250,
        }
    }
}

#[derive(Debug)]
pub struct Messages {
    pub pediatric: Finding,
    pub pregnancy: Finding,
    pub myasthenia_gravis: Finding,
    pub epilepsy: Finding,
    pub allergy: Finding,

    pub every_24h: &'static str,
    pub every_48h: &'static str,
    pub after_dialysis: &'static str,
    pub normal_renal: &'static str,
    pub mild_moderate_renal: &'static str,
    pub severe_renal: &'static str,
    pub esrd_renal: &'static str,
    pub mild_moderate_regimens: BandRegimens,
    pub severe_regimens: BandRegimens,
    pub esrd_regimens: BandRegimens,

    pub age_factor: &'static str,
    pub female_factor: &'static str,
    pub heart_factor: &'static str,
    pub potassium_factor: &'static str,
    pub magnesium_factor: &'static str,
    pub calcium_factor: &'static str,
    pub qt_drug_factor: &'static str,
    pub low_risk: &'static str,
    pub moderate_risk: &'static str,
    pub high_risk: &'static str,
    pub routine_monitoring: &'static str,
    pub moderate_monitoring: &'static str,
    pub high_risk_monitoring: &'static str,

    pub tendon_warning: &'static str,
    pub hypoglycemia_warning: &'static str,
    pub seizure_warning: &'static str,
    pub cns_warning: &'static str,
}

pub static EN: Messages = Messages {
    pediatric: Finding {
        title: "Pediatric Contraindication",
        message: "Levofloxacin is contraindicated in patients under 18 years due to risk of cartilage damage.",
    },
    pregnancy: Finding {
        title: "Pregnancy Contraindication",
        message: "Risk of fetal cartilage and bone damage - contraindicated in pregnancy.",
    },
    myasthenia_gravis: Finding {
        title: "Myasthenia Gravis",
        message: "Risk of severe muscle weakness and possible respiratory failure.",
    },
    epilepsy: Finding {
        title: "Epilepsy",
        message: "Increased risk of seizures - contraindicated.",
    },
    allergy: Finding {
        title: "Hypersensitivity",
        message: "Known allergy to fluoroquinolones - absolute contraindication.",
    },

    every_24h: "every 24 hours",
    every_48h: "every 48 hours",
    after_dialysis: "(or after dialysis)",
    normal_renal: "Normal Renal Function",
    mild_moderate_renal: "Mild to Moderate Renal Impairment",
    severe_renal: "Severe Renal Impairment",
    esrd_renal: "ESRD/Hemodialysis",
    mild_moderate_regimens: BandRegimens {
        mg750: "750mg every 48 hours",
        mg500: "Initial 500mg, then 250mg every 24h",
        mg250: "250mg every 24 hours (No adjustment)",
    },
    severe_regimens: BandRegimens {
        mg750: "Initial 750mg, then 500mg every 48h",
        mg500: "Initial 500mg, then 250mg every 48h",
        mg250: "250mg every 48 hours",
    },
    esrd_regimens: BandRegimens {
        mg750: "Initial 750mg, then 500mg every 48h or after dialysis",
        mg500: "Initial 500mg, then 250mg every 48h or after dialysis",
        mg250: "250mg every 48h or after dialysis",
    },

    age_factor: "Age > 65",
    female_factor: "Female sex",
    heart_factor: "Heart disease",
    potassium_factor: "Low potassium",
    magnesium_factor: "Low magnesium",
    calcium_factor: "Low calcium",
    qt_drug_factor: "QT-prolonging medication",
    low_risk: "Low Risk",
    moderate_risk: "Moderate Risk",
    high_risk: "High Risk",
    routine_monitoring: "Routine monitoring recommended",
    moderate_monitoring: "Monitor closely, consider baseline and follow-up ECG",
    high_risk_monitoring: "⚠️ HIGH RISK - Consult doctor immediately before administration",

    tendon_warning: "Risk of tendon rupture with concurrent corticosteroid use",
    hypoglycemia_warning: "Risk of severe hypoglycemia - monitor blood glucose closely",
    seizure_warning: "Increased seizure risk with NSAIDs",
    cns_warning: "May increase dizziness, nausea, and CNS effects",
};

pub static AR: Messages = Messages {
    pediatric: Finding {
        title: "ممنوع للأطفال",
        message: "الليفوفلوكساسين ممنوع لمن هم دون 18 عاماً لتجنب مخاطر إصابة الغضاريف.",
    },
    pregnancy: Finding {
        title: "ممنوع للحوامل",
        message: "خطر إصابة عظام وغضاريف الجنين - ممنوع أثناء الحمل.",
    },
    myasthenia_gravis: Finding {
        title: "وهن عضلي (Myasthenia Gravis)",
        message: "خطر حدوث ضعف عضلي شديد واحتمالية فشل تنفسي.",
    },
    epilepsy: Finding {
        title: "صرع (Epilepsy)",
        message: "زيادة خطر حدوث تشنجات - ممنوع استخدامه.",
    },
    allergy: Finding {
        title: "حساسية مفرطة",
        message: "حساسية معروفة للفلوروكينولونات - مانع استخدام مطلق.",
    },

    every_24h: "كل 24 ساعة",
    every_48h: "كل 48 ساعة",
    after_dialysis: "(أو بعد غسيل الكلى)",
    normal_renal: "وظائف كلى طبيعية",
    mild_moderate_renal: "قصور كلوي خفيف إلى متوسط",
    severe_renal: "قصور كلوي شديد",
    esrd_renal: "فشل كلوي نهائي/غسيل كلى",
    mild_moderate_regimens: BandRegimens {
        mg750: "750mg كل 48 ساعة",
        mg500: "أولية 500mg، ثم 250mg كل 24 ساعة",
        mg250: "250mg كل 24 ساعة (لا تغيير)",
    },
    severe_regimens: BandRegimens {
        mg750: "أولية 750mg، ثم 500mg كل 48 ساعة",
        mg500: "أولية 500mg، ثم 250mg كل 48 ساعة",
        mg250: "250mg كل 48 ساعة",
    },
    esrd_regimens: BandRegimens {
        mg750: "أولية 750mg، ثم 500mg كل 48 ساعة أو بعد الغسيل",
        mg500: "أولية 500mg، ثم 250mg كل 48 ساعة أو بعد الغسيل",
        mg250: "250mg كل 48 ساعة أو بعد الغسيل",
    },

    age_factor: "العمر > 65",
    female_factor: "أنثى",
    heart_factor: "أمراض القلب",
    potassium_factor: "انخفاض البوتاسيوم",
    magnesium_factor: "انخفاض المغنيسيوم",
    calcium_factor: "انخفاض الكالسيوم",
    qt_drug_factor: "أدوية تطيل QT",
    low_risk: "خطر منخفض",
    moderate_risk: "خطر متوسط",
    high_risk: "خطر مرتفع",
    routine_monitoring: "يوصى بالمراقبة الروتينية",
    moderate_monitoring: "مراقبة عن كثب، النظر في تخطيط قلب أساسي ومتابعة",
    high_risk_monitoring: "⚠️ خطر مرتفع - استشر الطبيب فوراً قبل الإعطاء",

    tendon_warning: "خطر تمزق الأوتار مع استخدام الكورتيكوستيرويدات المتزامن",
    hypoglycemia_warning: "خطر نقص سكر الدم الشديد - راقب سكر الدم عن كثب",
    seizure_warning: "زيادة خطر النوبات مع مضادات الالتهاب غير الستيرويدية",
    cns_warning: "قد يزيد من الدوخة والغثيان وتأثيرات الجهاز العصبي المركزي",
};

/// The catalog for `locale`.
pub fn for_locale(locale: Locale) -> &'static Messages {
    match locale {
        Locale::En => &EN,
        Locale::Ar => &AR,
    }
}
