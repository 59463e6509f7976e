use tracing::info;

use reels_shared::models::AiProcess;

use crate::actions::Action;
use crate::app::App;
use crate::progress::ProgressProfile;

/// Run an AI tool against a video: the process record lands in the store
/// and its progress simulation starts immediately under the given pacing.
pub async fn run_tool(
    app: &App,
    video_id: &str,
    tool: &str,
    profile: ProgressProfile,
) -> AiProcess {
    let process = app.api.process_with_ai(video_id, tool).await;
    info!(process = %process.id, tool, "AI tool started");

    app.store.dispatch(Action::AddAiProcess(process.clone()));
    app.progress.start(&process.id, profile);

    process
}
