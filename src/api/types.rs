//! Wire types for the Checkmate REST API

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::wizard::RegistrationSubmission;

/// Sign-up body for `POST /members`
///
/// The service expects a full member record; everything the wizard does
/// not collect is sent zeroed.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberSignUp {
    pub member_email: String,
    pub member_id: i64,
    pub member_introduce: String,
    pub member_native_lang: String,
    pub member_nickname: String,
    pub member_password: String,
    pub member_point: i64,
    pub member_profile_url: String,
    pub member_type_id: i64,
    pub member_grade: i64,
}

impl From<&RegistrationSubmission> for MemberSignUp {
    fn from(submission: &RegistrationSubmission) -> Self {
        Self {
            member_email: submission.email.clone(),
            member_id: 0,
            member_introduce: String::new(),
            member_native_lang: submission.language.clone(),
            member_nickname: submission.nickname.clone(),
            member_password: submission.password.clone(),
            member_point: 0,
            member_profile_url: String::new(),
            member_type_id: 0,
            member_grade: 0,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignInRequest<'a> {
    pub member_email: &'a str,
    pub member_password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignInResponse {
    pub accesstoken: String,
}

/// Public profile returned by `GET /members/{id}`
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    pub member_email: String,
    #[serde(alias = "memberNickname")]
    pub member_nick_name: String,
    pub member_native_lang: String,
    pub member_profile_url: Option<String>,
    pub member_point: i64,
    pub member_introduce: Option<String>,
    pub member_type_id: i64,
}

impl Member {
    /// Profile URL, treating an empty string as "no picture"
    pub fn profile_url(&self) -> Option<&str> {
        self.member_profile_url
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

/// A correction posted in reply to a question
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Answer {
    pub answer_id: i64,
    pub question_id: i64,
    pub member_id: i64,
    pub answer_contents: String,
    pub answer_explain: String,
    pub answer_url: Option<String>,
    pub answer_date: Option<String>,
}

/// Body for `POST /answers`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAnswer {
    pub question_id: i64,
    pub member_id: i64,
    pub answer_contents: String,
    pub answer_explain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_url: Option<String>,
}

/// Body for `PUT /answers`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerUpdate {
    pub answer_id: i64,
    pub answer_contents: String,
    pub answer_explain: String,
}

/// What the viewing member may do with an answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerActions {
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_choose: bool,
}

impl Answer {
    /// Creation date as `YYYY.MM.DD`
    pub fn created_date(&self) -> Option<String> {
        display_date(self.answer_date.as_deref()?)
    }

    /// Authors manage their own answers; others may accept an answer
    /// while the question is still open (status 0).
    pub fn actions_for(&self, viewer_id: i64, question_status: i32) -> AnswerActions {
        let own = viewer_id == self.member_id;
        AnswerActions {
            can_edit: own,
            can_delete: own,
            can_choose: !own && question_status == 0,
        }
    }

    pub fn has_explanation(&self) -> bool {
        !self.answer_explain.is_empty()
    }
}

/// One page of answers for a question
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerPage {
    pub list: Vec<Answer>,
    pub total_size: i64,
}

/// A question as shown in the question list
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    pub question_id: i64,
    pub member_id: i64,
    pub question_title: String,
    pub question_explain: String,
    pub question_point: i64,
    pub question_status: i32,
    pub question_date: Option<String>,
    pub question_end_date: Option<String>,
}

impl Question {
    pub fn created_date(&self) -> Option<String> {
        display_date(self.question_date.as_deref()?)
    }

    /// Whole days from `today` until the question closes, negative once past
    pub fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        let end = parse_date(self.question_end_date.as_deref()?)?;
        Some((end - today).num_days())
    }

    /// An accepted answer closes the question
    pub fn is_resolved(&self) -> bool {
        self.question_status != 0
    }
}

/// One page of questions
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionPage {
    pub list: Vec<Question>,
    pub total_size: i64,
}

/// Date part of a timestamp sent by the service
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}

/// Timestamp as `YYYY.MM.DD`
fn display_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match parse_date(raw) {
        Some(d) => Some(d.format("%Y.%m.%d").to_string()),
        // Unknown format: keep the date part as sent
        None => raw.split('T').next().map(|d| d.replace('-', ".")),
    }
}

/// Review left when accepting an answer
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub answer_id: i64,
    pub review_score: u8,
    pub review_contents: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_with_date(date: &str) -> Answer {
        Answer {
            answer_date: Some(date.to_string()),
            ..Answer::default()
        }
    }

    #[test]
    fn test_sign_up_body_shape() {
        let submission = RegistrationSubmission {
            language: "ko".to_string(),
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
            nickname: "nick".to_string(),
        };
        let body = serde_json::to_value(MemberSignUp::from(&submission)).unwrap();
        assert_eq!(body["memberEmail"], "a@b.com");
        assert_eq!(body["memberNativeLang"], "ko");
        assert_eq!(body["memberNickname"], "nick");
        assert_eq!(body["memberPassword"], "pw");
        assert_eq!(body["memberId"], 0);
        assert_eq!(body["memberProfileUrl"], "");
        assert_eq!(body["memberGrade"], 0);
    }

    #[test]
    fn test_member_accepts_both_nickname_spellings() {
        let a: Member = serde_json::from_str(r#"{"memberNickName": "neo"}"#).unwrap();
        let b: Member = serde_json::from_str(r#"{"memberNickname": "neo"}"#).unwrap();
        assert_eq!(a.member_nick_name, "neo");
        assert_eq!(b.member_nick_name, "neo");
    }

    #[test]
    fn test_member_profile_url_empty_is_none() {
        let member = Member {
            member_profile_url: Some(String::new()),
            ..Member::default()
        };
        assert_eq!(member.profile_url(), None);
    }

    #[test]
    fn test_created_date_formats() {
        assert_eq!(
            answer_with_date("2021-08-10T12:34:56").created_date().as_deref(),
            Some("2021.08.10")
        );
        assert_eq!(
            answer_with_date("2021-08-10T12:34:56.789+09:00")
                .created_date()
                .as_deref(),
            Some("2021.08.10")
        );
        assert_eq!(
            answer_with_date("2021-08-10").created_date().as_deref(),
            Some("2021.08.10")
        );
        assert_eq!(Answer::default().created_date(), None);
    }

    #[test]
    fn test_actions_for_viewer() {
        let answer = Answer {
            member_id: 7,
            ..Answer::default()
        };
        let own = answer.actions_for(7, 0);
        assert!(own.can_delete && own.can_edit && !own.can_choose);

        let other_open = answer.actions_for(3, 0);
        assert!(other_open.can_choose && !other_open.can_delete);

        let other_resolved = answer.actions_for(3, 1);
        assert_eq!(other_resolved, AnswerActions::default());
    }

    #[test]
    fn test_new_answer_body_skips_missing_url() {
        let body = serde_json::to_value(NewAnswer {
            question_id: 5,
            member_id: 3,
            answer_contents: "I went to school.".to_string(),
            answer_explain: "Past tense".to_string(),
            answer_url: None,
        })
        .unwrap();
        assert_eq!(body["questionId"], 5);
        assert_eq!(body["answerContents"], "I went to school.");
        assert!(body.get("answerUrl").is_none());
    }

    #[test]
    fn test_question_days_remaining() {
        let today = NaiveDate::from_ymd_opt(2021, 8, 10).unwrap();
        let question = Question {
            question_end_date: Some("2021-08-13T00:00:00".to_string()),
            ..Question::default()
        };
        assert_eq!(question.days_remaining(today), Some(3));

        let past = Question {
            question_end_date: Some("2021-08-09".to_string()),
            ..Question::default()
        };
        assert_eq!(past.days_remaining(today), Some(-1));
        assert_eq!(Question::default().days_remaining(today), None);
    }

    #[test]
    fn test_question_page_parses() {
        let page: QuestionPage = serde_json::from_str(
            r#"{"list": [{"questionId": 4, "memberId": 2, "questionTitle": "Is this natural?",
                "questionExplain": "Email to a client", "questionPoint": 50,
                "questionStatus": 1, "questionDate": "2021-08-01T10:00:00"}],
                "totalSize": 12}"#,
        )
        .unwrap();
        assert_eq!(page.total_size, 12);
        let question = &page.list[0];
        assert_eq!(question.question_point, 50);
        assert!(question.is_resolved());
        assert_eq!(question.created_date().as_deref(), Some("2021.08.01"));
    }

    #[test]
    fn test_answer_page_parses() {
        let page: AnswerPage = serde_json::from_str(
            r#"{"list": [{"answerId": 1, "questionId": 2, "memberId": 3,
                "answerContents": "fixed", "answerExplain": "", "answerUrl": null}],
                "totalSize": 1}"#,
        )
        .unwrap();
        assert_eq!(page.total_size, 1);
        assert_eq!(page.list[0].answer_contents, "fixed");
        assert!(!page.list[0].has_explanation());
    }
}
