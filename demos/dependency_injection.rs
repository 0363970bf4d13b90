//! Dependency Injection Example
//!
//! A small signup service whose collaborators live in the environment:
//! - a user directory that fails transiently and is retried with backoff
//! - a mailer that is given a deadline
//! - a lens-driven pipeline that collects the results into one record
//!
//! Run with `cargo run --example dependency_injection --features tracing`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tidewater::effect::prelude::*;
use tidewater::effect::TimeoutError;
use tidewater::{Lens, RetryPolicy, RetryStatus};

// ==================== Services ====================

trait UserDirectory: Send + Sync {
    fn lookup(&self, email: &str) -> Result<u64, String>;
}

trait Mailer: Send + Sync {
    fn send(&self, to: &str, body: &str) -> Result<(), String>;
}

/// Fails the first `flaky_calls` lookups, like a cold connection pool.
struct FlakyDirectory {
    calls: AtomicU32,
    flaky_calls: u32,
}

impl UserDirectory for FlakyDirectory {
    fn lookup(&self, email: &str) -> Result<u64, String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.flaky_calls {
            Err(format!("directory unavailable (call {call})"))
        } else {
            Ok(email.len() as u64 * 1000)
        }
    }
}

struct ConsoleMailer;

impl Mailer for ConsoleMailer {
    fn send(&self, to: &str, body: &str) -> Result<(), String> {
        println!("  mail to {to}: {body}");
        Ok(())
    }
}

#[derive(Clone)]
struct AppEnv {
    directory: Arc<dyn UserDirectory>,
    mailer: Arc<dyn Mailer>,
    policy: RetryPolicy,
}

// ==================== Effects ====================

fn lookup_user(email: String) -> impl Effect<Output = u64, Error = String, Env = AppEnv> {
    from_fn(move |env: &AppEnv| env.directory.lookup(&email))
}

fn lookup_with_retry(email: String) -> BoxedEffect<u64, String, AppEnv> {
    ask::<String, AppEnv>()
        .and_then(move |env: AppEnv| {
            retrying_on_error(env.policy.clone(), move |status: RetryStatus| {
                tracing::info!(attempt = status.iter_number.saturating_add(1), "looking up user");
                lookup_user(email.clone())
            })
        })
        .instrument(tracing::info_span!("lookup_with_retry"))
        .boxed()
}

fn send_welcome(to: String, body: String) -> BoxedEffect<(), TimeoutError<String>, AppEnv> {
    with_timeout(
        from_fn(move |env: &AppEnv| env.mailer.send(&to, &body)),
        Duration::from_secs(1),
    )
}

// ==================== Pipeline ====================

#[derive(Clone, Debug, Default)]
struct Signup {
    email: String,
    user_id: u64,
    greeting: String,
}

fn user_id() -> Lens<Signup, u64> {
    Lens::new(|s: &Signup| s.user_id, |s: Signup, user_id| Signup { user_id, ..s })
}

fn greeting() -> Lens<Signup, String> {
    Lens::new(
        |s: &Signup| s.greeting.clone(),
        |s: Signup, greeting| Signup { greeting, ..s },
    )
}

fn signup(email: &str) -> BoxedEffect<Signup, String, AppEnv> {
    pure::<_, String, AppEnv>(Signup {
        email: email.to_string(),
        ..Signup::default()
    })
    .bind_l(user_id(), |s| lookup_with_retry(s.email.clone()))
    .let_l(greeting(), |s| format!("Welcome aboard, user #{}!", s.user_id))
    .and_then(|s| {
        send_welcome(s.email.clone(), s.greeting.clone())
            .map_err(|e| e.to_string())
            .map(move |()| s)
    })
    .boxed()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("\n=== Signup with a flaky directory ===");

    let policy = RetryPolicy::exponential_backoff(Duration::from_millis(50))
        .with_max_retries(4)
        .with_max_delay(Duration::from_millis(200));
    println!("policy: {policy}");

    let env = AppEnv {
        directory: Arc::new(FlakyDirectory {
            calls: AtomicU32::new(0),
            flaky_calls: 2,
        }),
        mailer: Arc::new(ConsoleMailer),
        policy,
    };

    match signup("ada@example.com").execute(&env).await {
        Ok(signup) => println!("signed up: {:?}", signup),
        Err(e) => println!("signup failed: {e}"),
    }

    println!("\n=== Directory that never recovers ===");

    let env = AppEnv {
        directory: Arc::new(FlakyDirectory {
            calls: AtomicU32::new(0),
            flaky_calls: u32::MAX,
        }),
        ..env
    };

    match signup("grace@example.com").execute(&env).await {
        Ok(signup) => println!("signed up: {:?}", signup),
        Err(e) => println!("signup failed after retries: {e}"),
    }
}
