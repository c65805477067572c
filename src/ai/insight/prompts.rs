use super::types::ClinicalInsightRequest;

/// Generate the prompt for turning one analysis result into a clinical
/// insight.
///
/// Embeds all five request fields and pins the reply to the exact JSON
/// shape [`super::parse_insight`] expects.
pub fn insight_prompt(request: &ClinicalInsightRequest) -> String {
    format!(
        r#"You are a dental AI assistant preparing a patient-friendly summary of an automated X-ray analysis.

Doctor: {doctor}
Patient: {patient}
Detected cavities: {cavities}
Healthy teeth: {healthy}
Detection confidence: {confidence:.2}

Return only JSON with this structure, no other text:
{{
  "greeting": "1 sentence greeting addressed to the patient from the doctor",
  "diagnosisSummary": "2-3 sentence plain-language summary of the findings",
  "preventionTips": ["tip 1", "tip 2", "tip 3"],
  "correctiveActions": ["recommended action 1", "recommended action 2"],
  "riskLevel": "one of: low, medium, high"
}}"#,
        doctor = request.doctor_name,
        patient = request.patient_name,
        cavities = request.cavity_count,
        healthy = request.healthy_count,
        confidence = request.confidence,
    )
}
