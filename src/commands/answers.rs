//! Answer listing, posting, editing, deletion, and acceptance

use anyhow::{bail, Context, Result};
use futures::future::join_all;
use std::collections::{BTreeSet, HashMap};

use super::prompt;
use checkmate::api::{Answer, AnswerUpdate, ApiClient, NewAnswer, Review};

/// Who is looking at the list, for showing available actions
#[derive(Debug, Clone, Copy)]
pub struct Viewer {
    pub member_id: i64,
    pub question_status: i32,
}

pub async fn run_list(
    client: &ApiClient,
    question_id: i64,
    offset: u32,
    limit: u32,
    viewer: Option<Viewer>,
) -> Result<()> {
    let page = client
        .list_answers(question_id, offset, limit)
        .await
        .with_context(|| format!("Failed to load answers for question {}", question_id))?;

    if page.list.is_empty() {
        println!("No answers for question {}", question_id);
        return Ok(());
    }

    let authors = resolve_authors(client, &page.list).await;

    println!(
        "Answers {} of {} for question {}",
        page_range(offset, page.list.len()),
        page.total_size,
        question_id
    );
    for answer in &page.list {
        println!();
        let author = author_label(&authors, answer.member_id);
        for line in format_answer(answer, &author, viewer) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Nicknames of the answers' authors, looked up once per member
///
/// A failed lookup leaves the member out; callers fall back to the ID.
async fn resolve_authors(client: &ApiClient, answers: &[Answer]) -> HashMap<i64, String> {
    let ids: BTreeSet<i64> = answers.iter().map(|a| a.member_id).collect();
    let lookups = ids.into_iter().map(|id| async move {
        match client.get_member(id).await {
            Ok(member) if !member.member_nick_name.is_empty() => Some((id, member.member_nick_name)),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("Could not look up member {}: {}", id, e);
                None
            }
        }
    });
    join_all(lookups).await.into_iter().flatten().collect()
}

fn author_label(authors: &HashMap<i64, String>, member_id: i64) -> String {
    authors
        .get(&member_id)
        .cloned()
        .unwrap_or_else(|| format!("member {}", member_id))
}

pub async fn run_add(client: &ApiClient, answer: NewAnswer) -> Result<()> {
    if answer.answer_contents.trim().is_empty() {
        bail!("The corrected text cannot be empty");
    }
    let question_id = answer.question_id;
    client
        .add_answer(&answer)
        .await
        .with_context(|| format!("Failed to answer question {}", question_id))?;
    tracing::info!("Answered question {}", question_id);
    println!("Posted your answer to question {}", question_id);
    Ok(())
}

pub async fn run_edit(client: &ApiClient, update: AnswerUpdate) -> Result<()> {
    if update.answer_contents.trim().is_empty() {
        bail!("The corrected text cannot be empty");
    }
    let answer_id = update.answer_id;
    client
        .update_answer(&update)
        .await
        .with_context(|| format!("Failed to update answer {}", answer_id))?;
    tracing::info!("Updated answer {}", answer_id);
    println!("Updated answer {}", answer_id);
    Ok(())
}

pub async fn run_delete(client: &ApiClient, answer_id: i64, assume_yes: bool) -> Result<()> {
    if !assume_yes && !prompt::confirm(&format!("Delete answer {}?", answer_id))? {
        println!("Cancelled");
        return Ok(());
    }
    client
        .delete_answer(answer_id)
        .await
        .with_context(|| format!("Failed to delete answer {}", answer_id))?;
    tracing::info!("Deleted answer {}", answer_id);
    println!("Deleted answer {}", answer_id);
    Ok(())
}

pub async fn run_choose(
    client: &ApiClient,
    question_id: i64,
    answer_id: i64,
    score: u8,
    comment: String,
    assume_yes: bool,
) -> Result<()> {
    if !(1..=5).contains(&score) {
        bail!("Rating must be between 1 and 5");
    }
    let question = format!(
        "Accept answer {} for question {}? This closes the question.",
        answer_id, question_id
    );
    if !assume_yes && !prompt::confirm(&question)? {
        println!("Cancelled");
        return Ok(());
    }
    let review = Review {
        answer_id,
        review_score: score,
        review_contents: comment,
    };
    client
        .choose_answer(question_id, answer_id, &review)
        .await
        .with_context(|| format!("Failed to accept answer {}", answer_id))?;
    tracing::info!("Accepted answer {} for question {}", answer_id, question_id);
    println!("Accepted answer {} for question {}", answer_id, question_id);
    Ok(())
}

/// 1-based "first-last" label for a page starting at `offset`
pub(crate) fn page_range(offset: u32, count: usize) -> String {
    let first = u64::from(offset) + 1;
    let last = u64::from(offset) + count as u64;
    format!("{}-{}", first, last)
}

fn format_answer(answer: &Answer, author: &str, viewer: Option<Viewer>) -> Vec<String> {
    let date = answer
        .created_date()
        .unwrap_or_else(|| "unknown date".to_string());
    let mut lines = vec![format!("#{}  by {}  ({})", answer.answer_id, author, date)];

    if answer.has_explanation() {
        lines.push(format!("  Note: {}", answer.answer_explain));
    }
    for content_line in answer.answer_contents.lines() {
        lines.push(format!("  | {}", content_line));
    }
    if let Some(url) = answer.answer_url.as_deref().filter(|u| !u.is_empty()) {
        lines.push(format!("  Attachment: {}", url));
    }

    if let Some(viewer) = viewer {
        let actions = answer.actions_for(viewer.member_id, viewer.question_status);
        let mut hints = Vec::new();
        if actions.can_edit {
            hints.push(format!(
                "checkmate answers edit {} --contents <TEXT>",
                answer.answer_id
            ));
        }
        if actions.can_delete {
            hints.push(format!("checkmate answers delete {}", answer.answer_id));
        }
        if actions.can_choose {
            hints.push(format!(
                "checkmate answers choose {} {}",
                answer.question_id, answer.answer_id
            ));
        }
        if !hints.is_empty() {
            lines.push(format!("  Actions: {}", hints.join("  |  ")));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkmate::config::ApiConfig;

    fn answer() -> Answer {
        Answer {
            answer_id: 9,
            question_id: 5,
            member_id: 3,
            answer_contents: "I went to school.\nIt was fun.".to_string(),
            answer_explain: "Past tense".to_string(),
            answer_url: None,
            answer_date: Some("2021-08-10T09:00:00".to_string()),
        }
    }

    fn client_for(url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: url.to_string(),
            timeout_secs: 5,
            token: None,
        })
        .unwrap()
    }

    #[test]
    fn test_format_answer_without_viewer() {
        let lines = format_answer(&answer(), "neo", None);
        assert_eq!(lines[0], "#9  by neo  (2021.08.10)");
        assert_eq!(lines[1], "  Note: Past tense");
        assert_eq!(lines[2], "  | I went to school.");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_format_answer_actions() {
        let own = format_answer(
            &answer(),
            "neo",
            Some(Viewer {
                member_id: 3,
                question_status: 0,
            }),
        );
        let actions = own.last().unwrap();
        assert!(actions.contains("answers edit 9"));
        assert!(actions.contains("answers delete 9"));
        assert!(!actions.contains("choose"));

        let other = format_answer(
            &answer(),
            "neo",
            Some(Viewer {
                member_id: 4,
                question_status: 0,
            }),
        );
        assert!(other.last().unwrap().contains("answers choose 5 9"));

        let resolved = format_answer(
            &answer(),
            "neo",
            Some(Viewer {
                member_id: 4,
                question_status: 1,
            }),
        );
        assert!(!resolved.iter().any(|l| l.contains("Actions")));
    }

    #[test]
    fn test_page_range_at_offset_limit() {
        assert_eq!(page_range(0, 10), "1-10");
        assert_eq!(page_range(u32::MAX, 2), "4294967296-4294967297");
    }

    #[tokio::test]
    async fn test_resolve_authors_once_per_member_with_fallback() {
        let mut server = mockito::Server::new_async().await;
        let known = server
            .mock("GET", "/members/3")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"memberNickName": "neo"}"#)
            .expect(1)
            .create_async()
            .await;
        let _missing = server
            .mock("GET", "/members/4")
            .with_status(404)
            .create_async()
            .await;

        let answers = vec![
            answer(),
            Answer {
                answer_id: 10,
                ..answer()
            },
            Answer {
                answer_id: 11,
                member_id: 4,
                ..answer()
            },
        ];
        let authors = resolve_authors(&client_for(&server.url()), &answers).await;

        known.assert_async().await;
        assert_eq!(author_label(&authors, 3), "neo");
        assert_eq!(author_label(&authors, 4), "member 4");
    }

    #[tokio::test]
    async fn test_empty_contents_are_refused_before_sending() {
        let client = client_for("http://127.0.0.1:9");
        let err = run_edit(
            &client,
            AnswerUpdate {
                answer_id: 9,
                answer_contents: "   ".to_string(),
                answer_explain: String::new(),
            },
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }
}
