//! Literal parameter tables, transcribed from the authoritative
//! spreadsheet. Values are data, not derivation — do not "fix" them here;
//! discrepancies surface through the verifier.

/// R1-R10 base scenario. Each row expands into a low and a high
/// bleeding-risk record; the hazard is selected by variant, not stored.
pub(crate) struct SymptomaticRow {
    pub id: &'static str,
    pub p_vte: f64,
    pub tp: f64,
    pub rr_t: f64,
    pub rr_rx: f64,
    pub rr_bleed: f64,
    pub description: &'static str,
    pub category: &'static str,
}

pub(crate) const SYMPTOMATIC_VTE: &str = "Symptomatic VTE";
pub(crate) const UNUSUAL_SITES: &str = "VTE in Unusual Sites";

pub(crate) const R1_R10_BASE: [SymptomaticRow; 10] = [
    SymptomaticRow {
        id: "R1",
        p_vte: 0.10,
        tp: 0.38,
        rr_t: 1.65,
        rr_rx: 0.15,
        rr_bleed: 2.17,
        description: "Unprovoked VTE - completed short-term treatment",
        category: SYMPTOMATIC_VTE,
    },
    SymptomaticRow {
        id: "R2",
        p_vte: 0.01,
        tp: 0.38,
        rr_t: 1.65,
        rr_rx: 0.15,
        rr_bleed: 2.17,
        description: "VTE provoked by surgery",
        category: SYMPTOMATIC_VTE,
    },
    SymptomaticRow {
        id: "R3",
        p_vte: 0.05,
        tp: 0.38,
        rr_t: 1.65,
        rr_rx: 0.15,
        rr_bleed: 2.17,
        description: "VTE provoked by nonsurgical major transient risk factor",
        category: SYMPTOMATIC_VTE,
    },
    SymptomaticRow {
        id: "R4",
        p_vte: 0.05,
        tp: 0.38,
        rr_t: 1.65,
        rr_rx: 0.15,
        rr_bleed: 2.17,
        description: "VTE provoked by pregnancy or postpartum",
        category: SYMPTOMATIC_VTE,
    },
    SymptomaticRow {
        id: "R5",
        p_vte: 0.05,
        tp: 0.38,
        rr_t: 1.65,
        rr_rx: 0.15,
        rr_bleed: 2.17,
        description: "VTE associated with combined oral contraceptive use",
        category: SYMPTOMATIC_VTE,
    },
    SymptomaticRow {
        id: "R6",
        p_vte: 0.075,
        tp: 0.38,
        rr_t: 1.65,
        rr_rx: 0.15,
        rr_bleed: 2.17,
        description: "Unspecified type of VTE",
        category: SYMPTOMATIC_VTE,
    },
    SymptomaticRow {
        id: "R7",
        p_vte: 0.038,
        tp: 0.436,
        rr_t: 1.65,
        rr_rx: 0.15,
        rr_bleed: 2.17,
        description: "Cerebral venous thrombosis - discontinue setting",
        category: UNUSUAL_SITES,
    },
    SymptomaticRow {
        id: "R8",
        p_vte: 0.038,
        tp: 0.436,
        rr_t: 1.65,
        rr_rx: 0.15,
        rr_bleed: 2.17,
        description: "Cerebral venous thrombosis - continue indefinitely",
        category: UNUSUAL_SITES,
    },
    SymptomaticRow {
        id: "R9",
        p_vte: 0.05,
        tp: 0.416,
        rr_t: 1.65,
        rr_rx: 0.15,
        rr_bleed: 2.17,
        description: "Splanchnic venous thrombosis - discontinue setting",
        category: UNUSUAL_SITES,
    },
    SymptomaticRow {
        id: "R10",
        p_vte: 0.05,
        tp: 0.416,
        rr_t: 1.65,
        rr_rx: 0.15,
        rr_bleed: 2.17,
        description: "Splanchnic venous thrombosis - continue indefinitely",
        category: UNUSUAL_SITES,
    },
];

/// Standard-model row with an explicit hazard (R11-R14, R21-R23).
pub(crate) struct StandardRow {
    pub id: &'static str,
    pub p_vte: f64,
    pub tp: f64,
    pub rr_t: f64,
    pub rr_rx: f64,
    pub h: f64,
    pub rr_bleed: f64,
    pub description: &'static str,
}

pub(crate) const FAMILY_HISTORY: &str = "Asymptomatic with Family History";

pub(crate) const R11_R14: [StandardRow; 16] = [
    StandardRow { id: "R11a", p_vte: 0.015, tp: 0.5, rr_t: 2.71, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "First-degree relative with FVL, minor provoking risk factor" },
    StandardRow { id: "R11b", p_vte: 0.015, tp: 0.5, rr_t: 2.35, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "First-degree relative with PGM, minor provoking risk factor" },
    StandardRow { id: "R11c", p_vte: 0.05, tp: 0.5, rr_t: 12.17, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "First-degree relative with Protein C deficiency, minor risk factor" },
    StandardRow { id: "R11d", p_vte: 0.05, tp: 0.5, rr_t: 7.47, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "First-degree relative with Protein S deficiency, minor risk factor" },
    StandardRow { id: "R11e", p_vte: 0.05, tp: 0.5, rr_t: 5.98, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "First-degree relative with Antithrombin deficiency, minor risk factor" },
    StandardRow { id: "R12a", p_vte: 0.015, tp: 0.512, rr_t: 2.82, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "Panel testing - FVL known in family" },
    StandardRow { id: "R12b", p_vte: 0.015, tp: 0.524, rr_t: 2.55, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "Panel testing - PGM known in family" },
    StandardRow { id: "R12c", p_vte: 0.05, tp: 0.533, rr_t: 11.76, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "Panel testing - Protein C deficiency known in family" },
    StandardRow { id: "R12d", p_vte: 0.05, tp: 0.533, rr_t: 7.36, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "Panel testing - Protein S deficiency known in family" },
    StandardRow { id: "R12e", p_vte: 0.05, tp: 0.534, rr_t: 5.98, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "Panel testing - Antithrombin deficiency known in family" },
    StandardRow { id: "R13", p_vte: 0.012, tp: 0.142, rr_t: 3.89, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "Family history of VTE, unknown thrombophilia status, minor risk factor" },
    StandardRow { id: "R14a", p_vte: 0.0075, tp: 0.5, rr_t: 2.71, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "Family history of FVL (no VTE), minor risk factor" },
    StandardRow { id: "R14b", p_vte: 0.0075, tp: 0.5, rr_t: 2.54, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "Family history of PGM (no VTE), minor risk factor" },
    StandardRow { id: "R14c", p_vte: 0.025, tp: 0.5, rr_t: 12.17, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "First-degree relative with Protein C (no VTE), minor risk factor" },
    StandardRow { id: "R14d", p_vte: 0.025, tp: 0.5, rr_t: 7.47, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "First-degree relative with Protein S (no VTE), minor risk factor" },
    StandardRow { id: "R14e", p_vte: 0.025, tp: 0.5, rr_t: 5.98, rr_rx: 0.54, h: 0.004, rr_bleed: 2.09, description: "First-degree relative with Antithrombin (no VTE), minor risk factor" },
];

/// Reversed-model row (R15-R20). No bleeding multiplier applies; the
/// builder fixes RRbleed to the neutral value 1.
pub(crate) struct ReversedRow {
    pub id: &'static str,
    pub p_vte: f64,
    pub tp: f64,
    pub rr_t: f64,
    pub rr_rx: f64,
    pub h: f64,
    pub description: &'static str,
}

pub(crate) const COC_HRT: &str = "Women Considering COC/HRT";

pub(crate) const R15_R20: [ReversedRow; 21] = [
    ReversedRow { id: "R15", p_vte: 0.00035, tp: 0.0685, rr_t: 5.89, rr_rx: 3.5, h: 0.0595, description: "General population women considering COC" },
    ReversedRow { id: "R16a", p_vte: 0.002, tp: 0.0685, rr_t: 1.8, rr_rx: 2.22, h: 0.1077, description: "General population women considering HRT - estrogen alone" },
    ReversedRow { id: "R16b", p_vte: 0.002, tp: 0.0685, rr_t: 1.8, rr_rx: 4.28, h: 0.1559, description: "General population women considering HRT - combined" },
    ReversedRow { id: "R17", p_vte: 0.0012, tp: 0.142, rr_t: 3.87, rr_rx: 3.5, h: 0.0595, description: "Women with family history of VTE considering COC" },
    ReversedRow { id: "R18a", p_vte: 0.003, tp: 0.142, rr_t: 2.08, rr_rx: 2.22, h: 0.1077, description: "Women with family history of VTE considering HRT - estrogen" },
    ReversedRow { id: "R18b", p_vte: 0.003, tp: 0.142, rr_t: 2.08, rr_rx: 4.28, h: 0.1559, description: "Women with family history of VTE considering HRT - combined" },
    ReversedRow { id: "R19a", p_vte: 0.0025, tp: 0.5, rr_t: 2.71, rr_rx: 3.5, h: 0.0595, description: "Women with known FVL in family considering COC" },
    ReversedRow { id: "R19b", p_vte: 0.0025, tp: 0.5, rr_t: 2.35, rr_rx: 3.5, h: 0.0595, description: "Women with known PGM in family considering COC" },
    ReversedRow { id: "R19c", p_vte: 0.0084, tp: 0.5, rr_t: 12.07, rr_rx: 3.5, h: 0.0595, description: "Women with known Protein C deficiency considering COC" },
    ReversedRow { id: "R19d", p_vte: 0.0063, tp: 0.5, rr_t: 7.24, rr_rx: 3.5, h: 0.0595, description: "Women with known Protein S deficiency considering COC" },
    ReversedRow { id: "R19e", p_vte: 0.0049, tp: 0.5, rr_t: 5.98, rr_rx: 3.5, h: 0.0595, description: "Women with known Antithrombin deficiency considering COC" },
    ReversedRow { id: "R20a", p_vte: 0.0025, tp: 0.5, rr_t: 2.6, rr_rx: 2.22, h: 0.1077, description: "Women with known FVL considering HRT - estrogen" },
    ReversedRow { id: "R20b", p_vte: 0.0025, tp: 0.5, rr_t: 2.6, rr_rx: 4.28, h: 0.1559, description: "Women with known FVL considering HRT - combined" },
    ReversedRow { id: "R20c", p_vte: 0.0025, tp: 0.5, rr_t: 0.8, rr_rx: 2.22, h: 0.1077, description: "Women with known PGM considering HRT - estrogen" },
    ReversedRow { id: "R20d", p_vte: 0.0025, tp: 0.5, rr_t: 0.8, rr_rx: 4.28, h: 0.1559, description: "Women with known PGM considering HRT - combined" },
    ReversedRow { id: "R20e", p_vte: 0.0084, tp: 0.5, rr_t: 1.7, rr_rx: 2.22, h: 0.1077, description: "Women with Protein C deficiency considering HRT - estrogen" },
    ReversedRow { id: "R20f", p_vte: 0.0084, tp: 0.5, rr_t: 1.7, rr_rx: 4.28, h: 0.1559, description: "Women with Protein C deficiency considering HRT - combined" },
    ReversedRow { id: "R20g", p_vte: 0.0063, tp: 0.5, rr_t: 1.8, rr_rx: 2.22, h: 0.1077, description: "Women with Protein S deficiency considering HRT - estrogen" },
    ReversedRow { id: "R20h", p_vte: 0.0063, tp: 0.5, rr_t: 1.8, rr_rx: 4.28, h: 0.1559, description: "Women with Protein S deficiency considering HRT - combined" },
    ReversedRow { id: "R20i", p_vte: 0.0049, tp: 0.5, rr_t: 1.9, rr_rx: 2.22, h: 0.1077, description: "Women with Antithrombin deficiency considering HRT - estrogen" },
    ReversedRow { id: "R20j", p_vte: 0.0049, tp: 0.5, rr_t: 1.9, rr_rx: 4.28, h: 0.1559, description: "Women with Antithrombin deficiency considering HRT - combined" },
];

pub(crate) const PREGNANCY: &str = "Women Planning Pregnancy";

pub(crate) const R21_R23: [StandardRow; 12] = [
    StandardRow { id: "R21a", p_vte: 0.0375, tp: 0.25, rr_t: 20.96, rr_rx: 0.41, h: 0.00634, rr_bleed: 3.21, description: "Pregnant with homozygous FVL - antepartum prophylaxis" },
    StandardRow { id: "R21b", p_vte: 0.018, tp: 0.5, rr_t: 10.51, rr_rx: 0.41, h: 0.00634, rr_bleed: 3.21, description: "Pregnant with compound heterozygous FVL/PGM - antepartum" },
    StandardRow { id: "R21c", p_vte: 0.004, tp: 0.5, rr_t: 6.04, rr_rx: 0.41, h: 0.00634, rr_bleed: 3.21, description: "Pregnant with heterozygous FVL - antepartum prophylaxis" },
    StandardRow { id: "R21d", p_vte: 0.008, tp: 0.5, rr_t: 5.03, rr_rx: 0.41, h: 0.00634, rr_bleed: 3.21, description: "Pregnant with heterozygous PGM - antepartum prophylaxis" },
    StandardRow { id: "R21e", p_vte: 0.02025, tp: 0.25, rr_t: 9.36, rr_rx: 0.41, h: 0.00634, rr_bleed: 3.21, description: "Pregnant with Protein C/S/AT deficiency - antepartum" },
    StandardRow { id: "R22a", p_vte: 0.0375, tp: 0.25, rr_t: 20.96, rr_rx: 0.41, h: 0.00846, rr_bleed: 3.38, description: "Postpartum with homozygous FVL - postpartum prophylaxis" },
    StandardRow { id: "R22b", p_vte: 0.018, tp: 0.5, rr_t: 10.51, rr_rx: 0.41, h: 0.00846, rr_bleed: 3.38, description: "Postpartum with compound heterozygous FVL/PGM" },
    StandardRow { id: "R22c", p_vte: 0.004, tp: 0.5, rr_t: 6.04, rr_rx: 0.41, h: 0.00846, rr_bleed: 3.38, description: "Postpartum with heterozygous FVL" },
    StandardRow { id: "R22d", p_vte: 0.008, tp: 0.5, rr_t: 5.03, rr_rx: 0.41, h: 0.00846, rr_bleed: 3.38, description: "Postpartum with heterozygous PGM" },
    StandardRow { id: "R22e", p_vte: 0.02025, tp: 0.25, rr_t: 9.36, rr_rx: 0.41, h: 0.00846, rr_bleed: 3.38, description: "Postpartum with Protein C/S/AT deficiency" },
    StandardRow { id: "R23a", p_vte: 0.05, tp: 0.142, rr_t: 3.28, rr_rx: 0.61, h: 0.0036, rr_bleed: 1.65, description: "Pregnant with family history VTE, unknown thrombophilia - antepartum" },
    StandardRow { id: "R23b", p_vte: 0.066, tp: 0.142, rr_t: 3.28, rr_rx: 0.61, h: 0.008, rr_bleed: 1.65, description: "Postpartum with family history VTE, unknown thrombophilia" },
];
