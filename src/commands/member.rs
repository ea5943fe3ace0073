//! Member profile lookup

use anyhow::{Context, Result};

use checkmate::api::{ApiClient, Member};
use checkmate::wizard::language_label;

pub async fn run_member(client: &ApiClient, member_id: i64) -> Result<()> {
    let member = client
        .get_member(member_id)
        .await
        .with_context(|| format!("Failed to load member {}", member_id))?;

    for line in format_member(&member) {
        println!("{}", line);
    }
    Ok(())
}

fn format_member(member: &Member) -> Vec<String> {
    let language = language_label(&member.member_native_lang)
        .map(|label| format!("{} ({})", label, member.member_native_lang))
        .unwrap_or_else(|| member.member_native_lang.clone());

    let mut lines = vec![
        format!("Nickname: {}", member.member_nick_name),
        format!("Email:    {}", member.member_email),
        format!("Language: {}", language),
        format!("Points:   {}", member.member_point),
    ];
    if let Some(intro) = member.member_introduce.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("About:    {}", intro));
    }
    lines.push(format!(
        "Picture:  {}",
        member.profile_url().unwrap_or("(default)")
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_member() {
        let member = Member {
            member_email: "a@b.com".to_string(),
            member_nick_name: "neo".to_string(),
            member_native_lang: "ko".to_string(),
            member_profile_url: Some(String::new()),
            member_point: 120,
            member_introduce: None,
            member_type_id: 0,
        };
        let lines = format_member(&member);
        assert_eq!(lines[0], "Nickname: neo");
        assert_eq!(lines[2], "Language: Korean (ko)");
        assert_eq!(lines.last().unwrap(), "Picture:  (default)");
        assert!(!lines.iter().any(|l| l.starts_with("About")));
    }
}
