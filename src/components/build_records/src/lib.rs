mod error;

pub use error::{BuildError, BuildErrorKind};
use indexmap::map::Entry;
use manifest::{
    FieldDefinition, Manifest, RecordDecl, RecordDefinition, RecordDefinitions, parse_type_expr,
};
use record::Record;
use source_files::{Location, Source, SourceFileKey, SourceFiles};
use std::{collections::HashSet, path::Path};
use target_layout::{StdSizes, TypeLayoutCache};

/// A manifest that has been read and registered with the source files.
#[derive(Debug)]
pub struct LoadedManifest {
    pub package: String,
    pub key: SourceFileKey,
    pub manifest: Manifest,
}

pub fn load_manifest(path: &Path, source_files: &SourceFiles) -> Result<LoadedManifest, BuildError> {
    let content = std::fs::read_to_string(path).map_err(|error| {
        BuildErrorKind::FailedToRead(error).at(Source::new(
            source_files.add_named(path.into()),
            Location::default(),
        ))
    })?;

    let key = source_files.add(path.into(), content);

    let manifest = Manifest::from_json(source_files.get(key).content()).map_err(|error| {
        let location = Location::new(
            error.line().try_into().unwrap_or(u32::MAX),
            error.column().try_into().unwrap_or(u32::MAX),
        );

        BuildErrorKind::InvalidManifest(error).at(Source::new(key, location))
    })?;

    let package = manifest.package.clone().unwrap_or_else(|| {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("<unnamed>")
            .into()
    });

    Ok(LoadedManifest {
        package,
        key,
        manifest,
    })
}

/// Sizes every record of a manifest for the given platform, in declaration order.
pub fn build_records(
    loaded: &LoadedManifest,
    sizes: &StdSizes,
    source_files: &SourceFiles,
) -> Result<Vec<Record>, BuildError> {
    let mut definitions = RecordDefinitions::default();
    let mut sources = Vec::with_capacity(loaded.manifest.records.len());

    for declaration in loaded.manifest.records.iter() {
        let source = declaration_source(declaration, loaded.key, source_files);

        match definitions.entry(declaration.name.clone()) {
            Entry::Occupied(_) => {
                return Err(BuildErrorKind::DuplicateRecord(declaration.name.clone()).at(source));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(define_record(declaration, source)?);
            }
        }

        sources.push(source);
    }

    let cache = TypeLayoutCache::new(sizes, &definitions);

    definitions
        .values()
        .zip(sources)
        .map(|(definition, source)| {
            Record::from_oracle(definition.name.clone(), source, definition, &cache).map_err(
                |error| {
                    BuildErrorKind::Layout {
                        record: definition.name.clone(),
                        error,
                    }
                    .at(source)
                },
            )
        })
        .collect()
}

fn declaration_source(
    declaration: &RecordDecl,
    manifest_key: SourceFileKey,
    source_files: &SourceFiles,
) -> Source {
    let key = declaration
        .file
        .as_ref()
        .map_or(manifest_key, |file| source_files.add_named(file.clone()));

    Source::new(key, Location::new(declaration.line, declaration.column))
}

fn define_record(declaration: &RecordDecl, source: Source) -> Result<RecordDefinition, BuildError> {
    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(declaration.fields.len());

    for field in declaration.fields.iter() {
        if !seen.insert(field.name.as_str()) {
            return Err(BuildErrorKind::DuplicateField {
                record: declaration.name.clone(),
                field: field.name.clone(),
            }
            .at(source));
        }

        let ty = parse_type_expr(&field.ty).map_err(|error| {
            BuildErrorKind::InvalidFieldType {
                field: field.name.clone(),
                error,
            }
            .at(source)
        })?;

        fields.push(FieldDefinition::new(field.name.clone(), ty));
    }

    Ok(RecordDefinition {
        name: declaration.name.clone(),
        fields,
    })
}
