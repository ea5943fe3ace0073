//! Question listing

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use super::answers::page_range;
use checkmate::api::{ApiClient, Question};

/// List questions; `author` keeps only that member's questions
pub async fn run_list(
    client: &ApiClient,
    author: Option<i64>,
    offset: u32,
    limit: u32,
) -> Result<()> {
    let page = client
        .list_questions(author, offset, limit)
        .await
        .context("Failed to load questions")?;

    if page.list.is_empty() {
        match author {
            Some(_) => println!("You have not asked any questions yet"),
            None => println!("No questions yet"),
        }
        return Ok(());
    }

    let today = Local::now().date_naive();
    println!(
        "Questions {} of {}",
        page_range(offset, page.list.len()),
        page.total_size
    );
    for question in &page.list {
        println!();
        for line in format_question(question, today) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// "D-3" while open, "D-day" on the last day
fn deadline_label(question: &Question, today: NaiveDate) -> String {
    if question.is_resolved() {
        return "resolved".to_string();
    }
    match question.days_remaining(today) {
        Some(0) => "D-day".to_string(),
        Some(days) if days > 0 => format!("D-{}", days),
        Some(_) => "closed".to_string(),
        None => "no deadline".to_string(),
    }
}

fn format_question(question: &Question, today: NaiveDate) -> Vec<String> {
    let mut lines = vec![format!(
        "#{}  [{} pts]  [{}]  {}",
        question.question_id,
        question.question_point,
        deadline_label(question, today),
        question.question_title
    )];
    if !question.question_explain.is_empty() {
        lines.push(format!("  {}", question.question_explain));
    }
    if let Some(date) = question.created_date() {
        lines.push(format!("  Asked {}", date));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 8, 10).unwrap()
    }

    fn question(end: &str) -> Question {
        Question {
            question_id: 4,
            question_title: "Is this natural?".to_string(),
            question_explain: "Email to a client".to_string(),
            question_point: 50,
            question_date: Some("2021-08-01T10:00:00".to_string()),
            question_end_date: Some(end.to_string()),
            ..Question::default()
        }
    }

    #[test]
    fn test_format_question_card() {
        let lines = format_question(&question("2021-08-13"), today());
        assert_eq!(
            lines,
            vec![
                "#4  [50 pts]  [D-3]  Is this natural?".to_string(),
                "  Email to a client".to_string(),
                "  Asked 2021.08.01".to_string(),
            ]
        );
    }

    #[test]
    fn test_deadline_labels() {
        assert_eq!(deadline_label(&question("2021-08-10"), today()), "D-day");
        assert_eq!(deadline_label(&question("2021-08-01"), today()), "closed");

        let resolved = Question {
            question_status: 1,
            ..question("2021-08-13")
        };
        assert_eq!(deadline_label(&resolved, today()), "resolved");
        assert_eq!(deadline_label(&Question::default(), today()), "no deadline");
    }
}
