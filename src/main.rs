use clap::{Parser, Subcommand, ValueEnum};
use site_seo::config::{self, SiteConfig};
use site_seo::graph::{JsonLd, generate_schema_graph, schema_to_json_ld};
use site_seo::schema::{
    Schema, generate_blog_post_schema, generate_breadcrumb_schema, generate_contact_point_schema,
    generate_local_business_schema, generate_service_schema, generate_website_schema,
    get_breadcrumbs_for_post, get_breadcrumbs_for_service,
};
use site_seo::types::{BlogPost, BreadcrumbItem, PageSeoConfig};
use site_seo::{content, defaults, head, output, related, tags};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "site-seo")]
#[command(about = "SEO meta tags and schema.org JSON-LD for local business sites")]
#[command(long_about = "\
SEO meta tags and schema.org JSON-LD for local business sites

Every page gets a complete tag set: title, description, canonical URL,
Open Graph, Twitter card, robots and optional geo tags. Anything a page
doesn't set falls back to the site identity in seo.toml.

Layout:

  site/
  ├── seo.toml                     # Business identity and site defaults
  ├── page.toml                    # Optional per-page overrides (any name)
  └── posts/
      ├── 010-spring-checklist.md  # +++ TOML front matter +++ then markdown
      └── 020-frozen-pipes.md      # Numbered = collection order

Run 'site-seo gen-config' to generate a documented seo.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing seo.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Log defaulting decisions and skipped content
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the tag set for a standard page
    Tags {
        #[arg(value_enum)]
        page: PageKind,
        /// TOML file with per-page overrides
        #[arg(long)]
        overrides: Option<PathBuf>,
        /// Print a preview HTML document instead of the tag listing
        #[arg(long)]
        html: bool,
    },
    /// Tags and structured data for a service landing page
    Service {
        /// Display name, e.g. "Drain Cleaning"
        name: String,
        /// URL slug under /services/
        slug: String,
        /// Meta description (generated when omitted)
        #[arg(long)]
        description: Option<String>,
    },
    /// Tags and structured data for one blog post
    Post {
        /// Directory of markdown posts
        posts: PathBuf,
        /// Slug of the post
        slug: String,
    },
    /// Rank the posts most related to one post
    Related {
        /// Directory of markdown posts
        posts: PathBuf,
        /// Slug of the reference post
        slug: String,
        #[arg(long, default_value_t = related::DEFAULT_RELATED_LIMIT)]
        limit: usize,
    },
    /// Print a stock seo.toml with all options documented
    GenConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageKind {
    Home,
    Contact,
    Quote,
    Faq,
    Gallery,
    Privacy,
    Blog,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // gen-config runs without a usable seo.toml
    let site = match cli.command {
        Command::GenConfig => SiteConfig::default(),
        _ => config::load_config(&cli.config)?,
    };

    match cli.command {
        Command::Tags {
            page,
            overrides,
            html,
        } => {
            let mut seo = page_defaults(page, &site);
            if let Some(path) = overrides {
                seo = seo.overlay(load_page_overrides(&path)?);
            }
            let resolved = tags::generate_complete_seo_tags(&site, &seo);
            let graph = generate_schema_graph(page_schemas(page, &site));
            let json = schema_to_json_ld(&JsonLd::from(graph.clone()));
            if html {
                println!(
                    "{}",
                    head::render_preview_document(&resolved, Some(&json)).into_string()
                );
            } else {
                output::print_tag_set(&resolved);
                output::print_graph(&graph, &json);
            }
        }
        Command::Service {
            name,
            slug,
            description,
        } => {
            let seo = defaults::service_page_seo(&site, &name, description.as_deref(), &slug);
            let resolved = tags::generate_complete_seo_tags(&site, &seo);
            let path = format!("/services/{slug}");
            let graph = generate_schema_graph(vec![
                generate_breadcrumb_schema(&get_breadcrumbs_for_service(&site, &name, &path))
                    .into(),
                generate_service_schema(&site, &name, &resolved.description, &path).into(),
                generate_local_business_schema(&site).into(),
            ]);
            let json = schema_to_json_ld(&JsonLd::from(graph.clone()));
            output::print_tag_set(&resolved);
            output::print_graph(&graph, &json);
        }
        Command::Post { posts, slug } => {
            let posts = content::load_posts(&posts)?;
            let post = find_post(&posts, &slug)?;
            let resolved =
                tags::generate_complete_seo_tags(&site, &defaults::blog_post_seo(&site, post));
            let graph = generate_schema_graph(vec![
                generate_breadcrumb_schema(&get_breadcrumbs_for_post(&site, post)).into(),
                generate_blog_post_schema(
                    &site,
                    &post.title,
                    &post.description,
                    &post.body,
                    &post.publish_date,
                    post.modified_date.as_deref(),
                    &post.path(),
                )
                .into(),
            ]);
            let json = schema_to_json_ld(&JsonLd::from(graph.clone()));
            output::print_tag_set(&resolved);
            output::print_graph(&graph, &json);
        }
        Command::Related { posts, slug, limit } => {
            let posts = content::load_posts(&posts)?;
            let post = find_post(&posts, &slug)?;
            let ranked = related::rank_related_posts(post, &posts, limit);
            output::print_related(post, &ranked);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// `--verbose` lowers the default filter to `debug`; `RUST_LOG` still wins.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn page_defaults(kind: PageKind, site: &SiteConfig) -> PageSeoConfig {
    match kind {
        PageKind::Home => defaults::home_page_seo(site),
        PageKind::Contact => defaults::contact_page_seo(site),
        PageKind::Quote => defaults::quote_page_seo(site),
        PageKind::Faq => defaults::faq_page_seo(site),
        PageKind::Gallery => defaults::gallery_page_seo(site),
        PageKind::Privacy => defaults::privacy_page_seo(site),
        PageKind::Blog => defaults::blog_index_seo(site),
    }
}

/// Home carries the business and website entities; every other page gets a
/// `Home › {page}` trail, plus the contact point on the contact page.
fn page_schemas(kind: PageKind, site: &SiteConfig) -> Vec<Schema> {
    let (name, path) = match kind {
        PageKind::Home => {
            return vec![
                generate_local_business_schema(site).into(),
                generate_website_schema(site).into(),
            ];
        }
        PageKind::Contact => ("Contact", "/contact"),
        PageKind::Quote => ("Get a Quote", "/quote"),
        PageKind::Faq => ("FAQ", "/faq"),
        PageKind::Gallery => ("Gallery", "/gallery"),
        PageKind::Privacy => ("Privacy Policy", "/privacy"),
        PageKind::Blog => ("Blog", "/blog"),
    };
    let trail = [
        BreadcrumbItem::new("Home", site.absolute_url("/")),
        BreadcrumbItem::new(name, site.absolute_url(path)),
    ];
    let mut schemas: Vec<Schema> = vec![generate_breadcrumb_schema(&trail).into()];
    if let PageKind::Contact = kind {
        schemas.push(generate_contact_point_schema(site).into());
    }
    schemas
}

fn load_page_overrides(path: &Path) -> Result<PageSeoConfig, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn find_post<'a>(posts: &'a [BlogPost], slug: &str) -> Result<&'a BlogPost, String> {
    posts
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| format!("no post with slug '{slug}'"))
}
