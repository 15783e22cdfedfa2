pub const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS vehicles (
	id TEXT PRIMARY KEY,
	name TEXT NOT NULL,
	brand TEXT NOT NULL,
	year INTEGER NOT NULL,
	mileage BIGINT NOT NULL,
	price BIGINT NOT NULL,
	images TEXT[] NOT NULL DEFAULT '{}',
	description TEXT NOT NULL DEFAULT '',
	fuel_type TEXT NOT NULL,
	transmission TEXT NOT NULL,
	colors TEXT[] NOT NULL DEFAULT '{}',
	location TEXT NOT NULL DEFAULT '',
	features TEXT[] NOT NULL DEFAULT '{}',
	body_type TEXT NOT NULL,
	created_at TIMESTAMPTZ NOT NULL,
	updated_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX IF NOT EXISTS vehicles_created_at_idx ON vehicles (created_at DESC)";
