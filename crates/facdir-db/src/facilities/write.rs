//! Write operations for the `facilities` table.

use facdir_core::Facility;
use sqlx::PgExecutor;

/// Insert new facilities and update existing ones, keyed by `slug`.
///
/// Returns `(new_count, updated_count)`. The batch is sent as a single
/// `INSERT … SELECT * FROM UNNEST(…) ON CONFLICT` statement. Coordinates and
/// ratings are bound as `float8[]` and coerced to the `NUMERIC` columns by the
/// database.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn upsert_facilities<'e, E>(
    executor: E,
    facilities: &[Facility],
) -> Result<(u64, u64), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    if facilities.is_empty() {
        return Ok((0, 0));
    }

    let n = facilities.len();
    let mut slugs: Vec<String> = Vec::with_capacity(n);
    let mut names: Vec<String> = Vec::with_capacity(n);
    let mut addresses: Vec<Option<String>> = Vec::with_capacity(n);
    let mut cities: Vec<String> = Vec::with_capacity(n);
    let mut counties: Vec<Option<String>> = Vec::with_capacity(n);
    let mut states: Vec<String> = Vec::with_capacity(n);
    let mut state_abbrs: Vec<String> = Vec::with_capacity(n);
    let mut zip_codes: Vec<Option<String>> = Vec::with_capacity(n);
    let mut latitudes: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut longitudes: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut types: Vec<String> = Vec::with_capacity(n);
    let mut type_slugs: Vec<Option<String>> = Vec::with_capacity(n);
    let mut phones: Vec<Option<String>> = Vec::with_capacity(n);
    let mut websites: Vec<Option<String>> = Vec::with_capacity(n);
    let mut descriptions: Vec<Option<String>> = Vec::with_capacity(n);
    let mut ratings: Vec<Option<f64>> = Vec::with_capacity(n);
    let mut review_counts: Vec<Option<i32>> = Vec::with_capacity(n);
    let mut photos: Vec<Option<String>> = Vec::with_capacity(n);
    let mut photo_urls: Vec<Option<String>> = Vec::with_capacity(n);

    for f in facilities {
        slugs.push(f.slug.clone());
        names.push(f.name.clone());
        addresses.push(f.address.clone());
        cities.push(f.city.clone());
        counties.push(f.county.clone());
        states.push(f.state.clone());
        state_abbrs.push(f.state_abbr.to_uppercase());
        zip_codes.push(f.zip_code.clone());
        latitudes.push(f.latitude);
        longitudes.push(f.longitude);
        types.push(f.facility_type.clone());
        type_slugs.push(f.type_slug.clone());
        phones.push(f.phone.clone());
        websites.push(f.website.clone());
        descriptions.push(f.description.clone());
        ratings.push(f.rating);
        review_counts.push(f.review_count);
        photos.push(f.photo.clone());
        photo_urls.push(f.photo_url.clone());
    }

    let rows: Vec<bool> = sqlx::query_scalar::<_, bool>(
        "INSERT INTO facilities \
             (slug, name, address, city, county, state, state_abbr, zip_code, \
              latitude, longitude, facility_type, type_slug, phone, website, \
              description, rating, review_count, photo, photo_url) \
         SELECT * FROM UNNEST(\
              $1::text[], $2::text[], $3::text[], $4::text[], $5::text[], $6::text[], \
              $7::text[], $8::text[], $9::float8[], $10::float8[], $11::text[], \
              $12::text[], $13::text[], $14::text[], $15::text[], $16::float8[], \
              $17::int4[], $18::text[], $19::text[]) \
         ON CONFLICT (slug) DO UPDATE SET \
             name          = EXCLUDED.name, \
             address       = EXCLUDED.address, \
             city          = EXCLUDED.city, \
             county        = EXCLUDED.county, \
             state         = EXCLUDED.state, \
             state_abbr    = EXCLUDED.state_abbr, \
             zip_code      = EXCLUDED.zip_code, \
             latitude      = EXCLUDED.latitude, \
             longitude     = EXCLUDED.longitude, \
             facility_type = EXCLUDED.facility_type, \
             type_slug     = EXCLUDED.type_slug, \
             phone         = EXCLUDED.phone, \
             website       = EXCLUDED.website, \
             description   = EXCLUDED.description, \
             rating        = EXCLUDED.rating, \
             review_count  = EXCLUDED.review_count, \
             photo         = EXCLUDED.photo, \
             photo_url     = EXCLUDED.photo_url, \
             updated_at    = NOW() \
         RETURNING (xmax = 0) AS is_new",
    )
    .bind(&slugs)
    .bind(&names)
    .bind(&addresses)
    .bind(&cities)
    .bind(&counties)
    .bind(&states)
    .bind(&state_abbrs)
    .bind(&zip_codes)
    .bind(&latitudes)
    .bind(&longitudes)
    .bind(&types)
    .bind(&type_slugs)
    .bind(&phones)
    .bind(&websites)
    .bind(&descriptions)
    .bind(&ratings)
    .bind(&review_counts)
    .bind(&photos)
    .bind(&photo_urls)
    .fetch_all(executor)
    .await?;

    let new_count = rows.iter().filter(|&&is_new| is_new).count() as u64;
    let updated_count = rows.len() as u64 - new_count;

    Ok((new_count, updated_count))
}
