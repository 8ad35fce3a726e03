//! # Projects Page CLI
//!
//! Drives the projects page from a terminal:
//!
//! ```bash
//! projects-page --api-url http://localhost:3000 render --out projects.html
//! projects-page list
//! projects-page create --title "Blog" --tech Rust --tech Tokio --featured
//! projects-page edit 7 --featured false
//! projects-page delete 7 --path /projects/7
//! ```

use clap::{Args, Parser, Subcommand};
use projects_page::config::Config;
use projects_page::interaction::{Confirm, FixedAnswer, MemoryNavigator, Navigator, TerminalConfirm};
use projects_page::lifecycle::{setup_tracing, ProjectsPage};
use projects_page::model::{Project, ProjectDraft, ProjectId};
use projects_page::render::partition;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Instrument};

#[derive(Debug, Parser)]
#[command(name = "projects-page", version, about = "Browse and manage portfolio projects")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, env = "PROJECTS_CONFIG")]
    config: Option<PathBuf>,

    /// Origin serving /api/projects.
    #[arg(long, env = "PROJECTS_API_URL")]
    api_url: Option<String>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "PROJECTS_LOG")]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the collection and write the page as HTML.
    Render {
        /// Output file (stdout when omitted).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print one line per project, featured first.
    List,
    /// Create a project.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        image: Option<String>,
        /// Technology tag (repeatable).
        #[arg(long = "tech")]
        technologies: Vec<String>,
        #[arg(long)]
        featured: bool,
    },
    /// Update a project, starting from its current values.
    Edit {
        id: String,
        #[command(flatten)]
        changes: EditArgs,
    },
    /// Delete a project after confirmation.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
        /// Route the user is on when deleting.
        #[arg(long)]
        path: Option<String>,
    },
}

#[derive(Debug, Args)]
struct EditArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    image: Option<String>,
    /// Replaces all technology tags (repeatable).
    #[arg(long = "tech")]
    technologies: Vec<String>,
    #[arg(long, action = clap::ArgAction::Set)]
    featured: Option<bool>,
}

impl EditArgs {
    fn apply(self, project: &Project) -> ProjectDraft {
        let mut draft = ProjectDraft::from(project);
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(image) = self.image {
            draft.image_url = Some(image);
        }
        if !self.technologies.is_empty() {
            draft.technologies = self.technologies;
        }
        if let Some(featured) = self.featured {
            draft.featured = featured;
        }
        draft
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }
    if let Some(filter) = cli.log {
        config.log_filter = filter;
    }
    if let Command::Delete {
        path: Some(path), ..
    } = &cli.command
    {
        config.current_path = path.clone();
    }
    config.validate().map_err(|e| e.to_string())?;

    setup_tracing(&config.log_filter);
    info!(api = %config.api_base_url, "Starting projects page");

    let confirm: Arc<dyn Confirm> = match &cli.command {
        Command::Delete { yes: true, .. } => Arc::new(FixedAnswer(true)),
        _ => Arc::new(TerminalConfirm),
    };
    let navigator = Arc::new(MemoryNavigator::new(config.current_path.clone()));
    let page = ProjectsPage::from_config(&config, confirm, navigator.clone());

    let outcome = run(&page, cli.command).await;

    page.shutdown().await?;
    outcome?;

    if navigator.history().len() > 1 {
        info!(path = %navigator.current_path(), "Navigated");
    }
    Ok(())
}

async fn run(page: &ProjectsPage, command: Command) -> Result<(), String> {
    let span = tracing::info_span!("activate");
    let count = page.activate().instrument(span).await.map_err(|e| e.to_string())?;
    info!(count, "Projects loaded");

    match command {
        Command::Render { out } => {
            let html = page.render().await.map_err(|e| e.to_string())?;
            match out {
                Some(path) => {
                    std::fs::write(&path, html).map_err(|e| format!("{}: {e}", path.display()))?;
                    info!(path = %path.display(), "Page written");
                }
                None => println!("{html}"),
            }
        }
        Command::List => {
            let view = page.controller.snapshot().await.map_err(|e| e.to_string())?;
            let groups = partition(&view.projects);
            for project in groups.featured {
                println!("* {}\t{}\t{}", project.id, project.title, project.technologies.join(", "));
            }
            for project in groups.standard {
                println!("  {}\t{}\t{}", project.id, project.title, project.technologies.join(", "));
            }
        }
        Command::Create {
            title,
            description,
            image,
            technologies,
            featured,
        } => {
            let draft = ProjectDraft {
                title,
                description,
                image_url: image,
                technologies,
                featured,
            };
            page.controller.request_create().await.map_err(|e| e.to_string())?;
            page.controller
                .submit_form(draft, None)
                .await
                .map_err(|e| e.to_string())?;
            info!("Project created");
        }
        Command::Edit { id, changes } => {
            let id = ProjectId::from(id);
            let view = page.controller.snapshot().await.map_err(|e| e.to_string())?;
            let project = view
                .projects
                .into_iter()
                .find(|p| p.id == id)
                .ok_or_else(|| format!("Project {id} not found"))?;
            let draft = changes.apply(&project);

            page.controller
                .request_edit(project.clone())
                .await
                .map_err(|e| e.to_string())?;
            page.controller
                .submit_form(draft, Some(project))
                .await
                .map_err(|e| e.to_string())?;
            info!(%id, "Project updated");
        }
        Command::Delete { id, .. } => {
            let outcome = page
                .controller
                .request_delete(ProjectId::from(id))
                .await
                .map_err(|e| e.to_string())?;
            info!(?outcome, "Delete finished");
        }
    }
    Ok(())
}
