use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use ikigai_engine::assessment::domain::{AnswerSet, Language, PremiumTier};
use ikigai_engine::assessment::{AnswerCsvImporter, AssessmentEngine, AssessmentResult};
use ikigai_engine::config::AppConfig;
use ikigai_engine::error::AppError;
use ikigai_engine::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Ikigai Assessment Engine",
    about = "Score Ikigai assessments and generate tiered career content",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answer set and print the assessment to stdout
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// CSV export of quiz responses (Question ID, Selected Option);
    /// a built-in sample answer set is used when omitted
    #[arg(long)]
    answers_csv: Option<PathBuf>,
    /// Purchase tier (roadmap, personality, blueprint); free when omitted
    #[arg(long)]
    tier: Option<String>,
    /// Content language tag, e.g. en or es
    #[arg(long)]
    language: Option<String>,
    /// Attach the tier-gated detailed analysis
    #[arg(long)]
    detailed: bool,
    /// Emit the raw result as pretty-printed JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    answers: AnswerSet,
    #[serde(default)]
    premium_tier: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    detailed: bool,
}

#[derive(Debug, Serialize)]
struct ScoreResponse {
    generated_at: DateTime<Utc>,
    language: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    premium_tier: Option<PremiumTier>,
    result: AssessmentResult,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Score(args) => run_score(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment/score", post(score_endpoint))
        .layer(prometheus_layer)
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "assessment engine ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers_csv,
        tier,
        language,
        detailed,
        json,
    } = args;

    let config = AppConfig::load()?;

    let (answers, imported) = match answers_csv {
        Some(path) => (AnswerCsvImporter::from_path(path)?, true),
        None => (sample_answers(), false),
    };

    let tier = tier.as_deref().and_then(PremiumTier::from_tag);
    let language = language
        .map(|raw| Language::from_tag(&raw))
        .unwrap_or(config.content.default_language);

    let engine = AssessmentEngine::default();
    let result = if detailed {
        engine.evaluate(&answers, tier, language)
    } else {
        engine.score(&answers)
    };

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => eprintln!("failed to render result as JSON: {err}"),
        }
    } else {
        render_assessment(&result, imported, answers.len());
    }

    Ok(())
}

/// Demo answer set used when no CSV is provided: a passion-leaning
/// respondent with a secondary mission signal.
fn sample_answers() -> AnswerSet {
    [
        (1, 1),
        (2, 2),
        (3, 3),
        (5, 1),
        (6, 1),
        (7, 2),
        (9, 1),
        (10, 4),
        (13, 1),
        (17, 1),
        (22, 3),
        (26, 1),
        (29, 1),
        (30, 1),
    ]
    .into_iter()
    .collect()
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn score_endpoint(Json(payload): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let ScoreRequest {
        answers,
        premium_tier,
        language,
        detailed,
    } = payload;

    let tier = premium_tier.as_deref().and_then(PremiumTier::from_tag);
    let language = language
        .as_deref()
        .map(Language::from_tag)
        .unwrap_or_default();

    let engine = AssessmentEngine::default();
    let result = if detailed {
        engine.evaluate(&answers, tier, language)
    } else {
        engine.score(&answers)
    };

    Json(ScoreResponse {
        generated_at: Utc::now(),
        language: language.tag(),
        premium_tier: tier,
        result,
    })
}

fn render_assessment(result: &AssessmentResult, imported: bool, submitted: usize) {
    println!("Ikigai assessment");
    if imported {
        println!("Data source: answers CSV import ({submitted} responses)");
    } else {
        println!("Data source: built-in sample answer set ({submitted} responses)");
    }

    println!("\nPillar scores");
    println!("- Passion: {}", result.passion);
    println!("- Mission: {}", result.mission);
    println!("- Vocation: {}", result.vocation);
    println!("- Profession: {}", result.profession);
    println!("- Overall: {}", result.overall);

    println!("\nProfile");
    println!("- Primary: {}", result.primary_type);
    println!("- Secondary: {}", result.secondary_type);

    if result.strengths.is_empty() {
        println!("\nStrengths: none scored");
    } else {
        println!("\nStrengths");
        for strength in &result.strengths {
            println!("- {strength}");
        }
    }

    println!("\nRecommendation");
    println!("{}", result.recommendations.description);
    println!("\nCareers to explore");
    for career in &result.recommendations.careers {
        println!("- {career}");
    }
    println!("\nNext actions");
    for action in &result.recommendations.actions {
        println!("- {action}");
    }

    if let Some(analysis) = &result.detailed_analysis {
        println!("\nDetailed analysis sections");
        let sections: [(&str, bool); 10] = [
            (
                "personality_insights",
                analysis.personality_insights.is_some(),
            ),
            ("career_matches", analysis.career_matches.is_some()),
            ("career_roadmaps", analysis.career_roadmaps.is_some()),
            ("development_areas", analysis.development_areas.is_some()),
            ("market_insights", analysis.market_insights.is_some()),
            ("personality_profile", analysis.personality_profile.is_some()),
            ("networking_strategy", analysis.networking_strategy.is_some()),
            ("ai_mentor", analysis.ai_mentor.is_some()),
            ("interview_prep", analysis.interview_prep.is_some()),
            ("success_blueprint", analysis.success_blueprint.is_some()),
        ];
        for (name, included) in sections {
            let marker = if included { "included" } else { "not in tier" };
            println!("- {name}: {marker}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request(tier: Option<&str>, detailed: bool) -> ScoreRequest {
        ScoreRequest {
            answers: sample_answers(),
            premium_tier: tier.map(str::to_string),
            language: None,
            detailed,
        }
    }

    #[tokio::test]
    async fn score_endpoint_returns_basic_result() {
        let Json(body) = score_endpoint(Json(sample_request(None, false))).await;

        assert_eq!(body.result.overall as usize, sample_answers().len());
        assert_eq!(body.result.primary_type, "Creative Enthusiast");
        assert!(body.result.detailed_analysis.is_none());
        assert_eq!(body.language, "en");
        assert!(body.premium_tier.is_none());
    }

    #[tokio::test]
    async fn score_endpoint_gates_detailed_sections_by_tier() {
        let Json(free) = score_endpoint(Json(sample_request(None, true))).await;
        let analysis = free.result.detailed_analysis.expect("analysis attached");
        assert!(analysis.personality_insights.is_some());
        assert!(analysis.career_matches.is_none());

        let Json(full) = score_endpoint(Json(sample_request(Some("blueprint"), true))).await;
        let analysis = full.result.detailed_analysis.expect("analysis attached");
        assert!(analysis.success_blueprint.is_some());
        assert_eq!(full.premium_tier, Some(PremiumTier::Blueprint));
    }

    #[tokio::test]
    async fn unknown_tier_strings_fall_back_to_free_access() {
        let Json(body) = score_endpoint(Json(sample_request(Some("platinum"), true))).await;
        assert!(body.premium_tier.is_none());
        let analysis = body.result.detailed_analysis.expect("analysis attached");
        assert!(analysis.market_insights.is_none());
    }

    #[tokio::test]
    async fn score_route_round_trips_over_http() {
        use tower::util::ServiceExt;

        let app = Router::new().route("/api/v1/assessment/score", post(score_endpoint));
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/api/v1/assessment/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(
                serde_json::to_vec(&json!({
                    "answers": { "1": 1, "5": 1 },
                    "premium_tier": "roadmap",
                    "detailed": true
                }))
                .expect("request serializes"),
            ))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("handler responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is JSON");
        assert_eq!(body["result"]["overall"], 2);
        assert_eq!(body["premium_tier"], "roadmap");
        let analysis = body["result"]["detailed_analysis"]
            .as_object()
            .expect("analysis object");
        assert!(analysis.contains_key("career_matches"));
        assert!(!analysis.contains_key("success_blueprint"));
    }
}
