use crate::model::{ReportRow, ReviewError};

/// System message sent ahead of every review request.
pub const REVIEWER_SYSTEM_PROMPT: &str = "You are a logical and insightful academic reviewer.";

/// Column headers every monthly report sheet must carry.
///
/// "Improvememt Plan Progress" keeps the spelling used by the source
/// spreadsheets.
pub const REPORT_COLUMNS: [&str; 22] = [
    "Khotwa Program Status",
    "Current Academic Status",
    "Next Month Academic Status",
    "Academic Concerns",
    "Actions Taken on Academic Concerns",
    "Proactive Actions Taken",
    "Is student on an Improvement Plan?",
    "Improvememt Plan Progress",
    "Reason for contact with ADEK Advisor",
    "Date of meeting with ADEK Advisor",
    "Mentor's Contact Point with Institutions",
    "Date of meeting with institution",
    "Type of Transfer",
    "Stage of Transfer",
    "Institution student transferred to",
    "Mentor support provided in transfer",
    "Student well-being concerns",
    "Actions taken on student well-being concerns",
    "Student participation in any extracurricular activity?",
    "Details of extracurricular activities",
    "Activities' impact on academics",
    "Student notes",
];

/// Render one report row into the full review prompt: the student's data
/// block, the review objective, the nine mandatory cross-field rules, and
/// the strict reply-format directive.
///
/// A sheet missing any expected column fails here, and the failure surfaces
/// in that row's remark rather than aborting the whole pass.
pub fn build_review_prompt(row: &ReportRow) -> Result<String, ReviewError> {
    let khotwa_program_status = row.display_field("Khotwa Program Status")?;
    let current_academic_status = row.display_field("Current Academic Status")?;
    let next_month_academic_status = row.display_field("Next Month Academic Status")?;
    let academic_concerns = row.display_field("Academic Concerns")?;
    let actions_taken_on_concerns = row.display_field("Actions Taken on Academic Concerns")?;
    let proactive_actions_taken = row.display_field("Proactive Actions Taken")?;
    let on_improvement_plan = row.display_field("Is student on an Improvement Plan?")?;
    let improvement_plan_progress = row.display_field("Improvememt Plan Progress")?;
    let advisor_contact_reason = row.display_field("Reason for contact with ADEK Advisor")?;
    let advisor_meeting_date = row.display_field("Date of meeting with ADEK Advisor")?;
    let institution_contact_point = row.display_field("Mentor's Contact Point with Institutions")?;
    let institution_meeting_date = row.display_field("Date of meeting with institution")?;
    let transfer_type = row.display_field("Type of Transfer")?;
    let transfer_stage = row.display_field("Stage of Transfer")?;
    let transfer_institution = row.display_field("Institution student transferred to")?;
    let transfer_support = row.display_field("Mentor support provided in transfer")?;
    let wellbeing_concerns = row.display_field("Student well-being concerns")?;
    let wellbeing_actions = row.display_field("Actions taken on student well-being concerns")?;
    let extracurricular_participation =
        row.display_field("Student participation in any extracurricular activity?")?;
    let extracurricular_details = row.display_field("Details of extracurricular activities")?;
    let extracurricular_impact = row.display_field("Activities' impact on academics")?;
    let student_notes = row.display_field("Student notes")?;

    Ok(format!(
        r#"
You are an expert academic reviewer.

Below is a student's monthly report:

--- STUDENT DATA ---

📘 Study Status:
- Khotwa Program Status: {khotwa_program_status}
- Current Academic Status: {current_academic_status}
- Next Month Academic Status: {next_month_academic_status}

📘 Academic:
- Academic Concerns: {academic_concerns}
- Actions Taken on Academic Concerns: {actions_taken_on_concerns}
- Proactive Actions Taken: {proactive_actions_taken}
- Is student on an Improvement Plan?: {on_improvement_plan}
- Improvememt Plan Progress: {improvement_plan_progress}

📞 Mentor Contact with ADEK Advisor:
- Reason for contact with ADEK Advisor: {advisor_contact_reason}
- Date of meeting with ADEK Advisor: {advisor_meeting_date}

🏫 Mentor Contact with Institution:
- Mentor's Contact Point with Institutions: {institution_contact_point}
- Date of meeting with institution: {institution_meeting_date}

🔁 Transfer:
- Type of Transfer: {transfer_type}
- Stage of Transfer: {transfer_stage}
- Institution student transferred to: {transfer_institution}
- Mentor support provided in transfer: {transfer_support}

💡 Well-being:
- Student well-being concerns: {wellbeing_concerns}
- Actions taken on student well-being concerns: {wellbeing_actions}

🎯 Extracurricular:
- Student participation in any extracurricular activity?: {extracurricular_participation}
- Details of extracurricular activities: {extracurricular_details}
- Activities' impact on academics: {extracurricular_impact}

📝 Notes on student:
{student_notes}

---

🔍 PRIMARY REVIEW OBJECTIVE:

You must interpret the “Notes on student” to verify the logical correctness of:
- "Academic Concerns" and "Actions Taken on Academic Concerns"
- Transitions in "Academic Status" (Current ↔ Next)
- Well-being and transfer actions
- All other key fields

Each rule below is **mandatory**. If any one rule is violated, you must:
- Set **Status = Need Clarification**
- Mention the rule number and reason in **Remark**

---

📜 LOGICAL RULES TO VALIDATE (ALL ARE EQUALLY IMPORTANT):

🔹 Rule 1: Academic Concerns ↔ Actions Taken
If "Academic Concerns" = "No concerns", then "Actions Taken on Academic Concerns" must be "No action needed"
Vice versa: If "Actions Taken" = "No action needed", then "Academic Concerns" must be "No concerns"

🔹 Rule 2: Academic Improvement Plan Required
If "Actions Taken on Academic Concerns" = "Created or revised Academic Improvement Plan":
- Then "Is student on an Improvement Plan?" = "Yes"
- And "Improvement Plan Progress" ≠ "Not applicable to student"
Vice versa: If student is on an Improvement Plan or progress is listed, then "Actions Taken" must reflect that.

🔹 Rule 3: Transfer Logic
- If "Type of Transfer" = "Not Applicable",
  → Institution student transferred to **should** be "N/A" or "Unknown"
- If "Stage of Transfer" = "Not Applicable" or "Transfer rejected",
  → Institution student transferred to **should** be "N/A" or "Unknown"
  → else Institution student transferred to **can** be any value except "N/A"
Vice versa: If institution is N/A, stage must be "Not Applicable"

🔹 Rule 4: Well-being Consistency
If "Student well-being concerns" = "None", then "Actions taken on student well-being concerns" = "None"
Vice versa: If actions = "None", concerns must also be "None"

🔹 Rule 5: Extracurricular Activity
If participation ≠ "No":
- Then both "Details of extracurricular activities" and "Activities' impact on academics" must be filled
Vice versa: If those fields are filled, participation cannot be "No"

🔹 Rule 6: Academic Status Progression (CRITICAL)
- If Current Academic Status = "Bachelor Degree Courses Only" or "Associate Degree Courses Only",
  → Next Month Academic Status **cannot** be "English Program Courses Only"
- If Current Academic Status = "English Program Courses Only",
  → Next Month must also be "English Program Courses Only"
- If either value = "Associate & Bachelor Degree Courses",
  → Must be justified in Notes on student
Vice versa: Any status change between English and Degree programs must be justified. If not, mark "Need Clarification"

🔹 Rule 7: Current Academic Status ↔ Khotwa Status
If "Current Academic Status" = "None",
→ Khotwa Status must be "Termination - In Progress" or "On Hold - Not Enrolled"
Vice versa: If Khotwa Status = one of those, Current Academic Status should be "None"

🔹 Rule 8: Grade Release Date Check
If "Khotwa Program Status" contains "Active", then expected grade release date (if present) must not include "1900"
Vice versa: If grade date = "1900", then Khotwa status must not say "Active"

🔹 Rule 9: Additional Notes-Based Validations
If “Academic Concerns” = “Behavioral issues impacting academics”, the Notes must **justify** it
If “Actions taken on student well-being concerns” = “Informed ADEK Advisor of Critical concerns”, the Notes must **justify** it

---

If multiple rules are violated, list all.
Return the result **strictly** in the following format — do not add any explanation or extra commentary:

Status: [Approved / Need Clarification]
Remark: [Rule X violated: explanation
         Rule Y violated: explanation]
(Include all violated rules)]

"#
    ))
}
