//! Command dispatch

use anyhow::{anyhow, Context, Result};
use std::io::Write;
use std::time::Duration;

use nf_core::domain::entities::{LoginRequest, NewsItem, NewsList, SignupRequest, User};
use nf_core::repositories::SessionStore;
use nf_core::services::{AuthApi, NewsApi, NewsQueryOptions, SessionContext};
use nf_shared::QueryConfig;

use crate::args::Command;

/// Poll period for `news --watch` when neither flag nor config sets one
const DEFAULT_WATCH_INTERVAL_SECS: u64 = 60;

/// Execute one command against the session, writing results to `out`
pub async fn run<C, S, W>(
    command: &Command,
    context: &SessionContext<C, S>,
    query: &QueryConfig,
    out: &mut W,
) -> Result<()>
where
    C: AuthApi + NewsApi + 'static,
    S: SessionStore + ?Sized,
    W: Write,
{
    match command {
        Command::Signup {
            email,
            password,
            name,
        } => {
            let request = SignupRequest::new(email.as_str(), password.as_str(), name.as_str());
            let response = context.auth().signup(&request).await?;
            writeln!(out, "Signed up as {}", response.user.display_name())?;
        }
        Command::Login { email, password } => {
            let request = LoginRequest::new(email.as_str(), password.as_str());
            let response = context.auth().login(&request).await?;
            writeln!(out, "Logged in as {}", response.user.display_name())?;
        }
        Command::Logout => {
            context.auth().logout().await?;
            writeln!(out, "Logged out")?;
        }
        Command::Me => match context.auth().current_user().await? {
            Some(user) => print_user(out, &user)?,
            None => writeln!(out, "Not logged in")?,
        },
        Command::Status => {
            // A failed lookup still yields a definite status below.
            if let Err(err) = context.auth().current_user().await {
                tracing::debug!(error = %err, "Identity lookup failed");
            }
            let status = context.auth().auth_status().await;
            match (&status.user, &status.error) {
                (Some(user), _) if status.is_authenticated => {
                    writeln!(out, "Authenticated as {}", user.display_name())?
                }
                (_, Some(error)) => writeln!(out, "Not authenticated ({})", error.message)?,
                _ => writeln!(out, "Not authenticated")?,
            }
        }
        Command::Refresh => {
            context.auth().refresh_session().await?;
            writeln!(out, "Tokens refreshed")?;
        }
        Command::News {
            id: Some(id), ..
        } => {
            let item = context
                .news()
                .news_item(id, &NewsQueryOptions::default())
                .await?
                .ok_or_else(|| anyhow!("news item {id} not found"))?;
            print_item(out, &item)?;
        }
        Command::News {
            watch: true,
            interval,
            ..
        } => {
            let period = (*interval)
                .or(query.news_refetch_interval_secs)
                .unwrap_or(DEFAULT_WATCH_INTERVAL_SECS);
            watch_news(context, Duration::from_secs(period), out).await?;
        }
        Command::News { .. } => {
            let news = context
                .news()
                .news(&NewsQueryOptions::default())
                .await?
                .unwrap_or_default();
            print_news(out, &news)?;
        }
    }
    Ok(())
}

async fn watch_news<C, S, W>(
    context: &SessionContext<C, S>,
    period: Duration,
    out: &mut W,
) -> Result<()>
where
    C: AuthApi + NewsApi + 'static,
    S: SessionStore + ?Sized,
    W: Write,
{
    let mut subscription = context
        .news()
        .subscribe(NewsQueryOptions::default().with_interval(period));
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            update = subscription.next() => match update {
                Some(news) => {
                    print_news(out, &news)?;
                    writeln!(out)?;
                }
                None => break,
            },
        }
    }
    Ok(())
}

fn print_user<W: Write>(out: &mut W, user: &User) -> Result<()> {
    let rendered = serde_json::to_string_pretty(user).context("failed to render user")?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

fn print_item<W: Write>(out: &mut W, item: &NewsItem) -> Result<()> {
    writeln!(out, "{}", item.title)?;
    if !item.summary.is_empty() {
        writeln!(out, "{}", item.summary)?;
    }
    if !item.image.is_empty() {
        writeln!(out, "{}", item.image)?;
    }
    Ok(())
}

fn print_news<W: Write>(out: &mut W, news: &NewsList) -> Result<()> {
    if news.is_empty() {
        writeln!(out, "No news")?;
        return Ok(());
    }
    for item in &news.items {
        writeln!(out, "{}\t{}", item.id, item.title)?;
    }
    Ok(())
}
