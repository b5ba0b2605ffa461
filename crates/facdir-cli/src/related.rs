use clap::Args;
use facdir_core::related::{DEFAULT_RELATED_LIMIT, MAX_RELATED_LIMIT};
use facdir_core::{find_related, Facility, RelatedQuery};

#[derive(Debug, Args)]
pub(crate) struct RelatedArgs {
    /// Slug of the facility to exclude (usually the one being viewed)
    #[arg(long)]
    pub exclude: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    /// Facility type slug or label fragment (e.g. detox-center)
    #[arg(long = "type")]
    pub facility_type: Option<String>,
    /// State name or abbreviation
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub county: Option<String>,
    #[arg(long, allow_negative_numbers = true, requires = "lng")]
    pub lat: Option<f64>,
    #[arg(long, allow_negative_numbers = true, requires = "lat")]
    pub lng: Option<f64>,
    #[arg(long, default_value_t = DEFAULT_RELATED_LIMIT)]
    pub limit: usize,
}

impl From<RelatedArgs> for RelatedQuery {
    fn from(args: RelatedArgs) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            exclude: non_empty(args.exclude),
            city: non_empty(args.city),
            facility_type: non_empty(args.facility_type),
            state: non_empty(args.state),
            county: non_empty(args.county),
            origin: args.lat.zip(args.lng),
            limit: args.limit.min(MAX_RELATED_LIMIT),
        }
    }
}

pub(crate) async fn run_related(pool: &sqlx::PgPool, args: RelatedArgs) -> anyhow::Result<()> {
    let query = RelatedQuery::from(args);
    let facilities: Vec<Facility> = facdir_db::list_all_facilities(pool)
        .await?
        .into_iter()
        .map(Facility::from)
        .collect();

    let related = find_related(&facilities, &query);
    tracing::info!(
        pool = facilities.len(),
        results = related.len(),
        "related facilities ranked"
    );
    println!("{}", serde_json::to_string_pretty(&related)?);
    Ok(())
}
