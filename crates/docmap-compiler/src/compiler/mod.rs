mod diagnostics;
mod parameters;
mod traversal;


use docmap_bridge::{Analyzer, Bridge, BridgeFactory};
use docmap_core::descriptor::{EmbeddedDeclaration, Index, Store, DEFAULT_PREFIX};
use docmap_core::{
    resolve_accessor, Getter, MemberDescriptor, MetadataProvider, Settings, TypeDescriptor,
    TypeRegistry, ValueType,
};
use serde::Serialize;

use crate::error::CompileError;
use crate::mapping::{
    ClassBridgeMapping, ContainedInMapping, DocumentIdMapping, DocumentMapping, EmbeddedMapping,
    FieldMapping,
};

pub use diagnostics::{Diagnostic, Diagnostics, Severity};

use parameters::assign_parameters;
use traversal::Traversal;

/// Result of a successful build: the mapping plus any non-fatal issues.
#[derive(Debug, Clone, Serialize)]
pub struct Compiled {
    pub mapping: DocumentMapping,
    pub diagnostics: Diagnostics,
}

/// Compiles a root type into its [`DocumentMapping`].
///
/// The compiler holds no traversal state of its own; every call to
/// [`build`](Self::build) starts from a fresh context, so one compiler can
/// serve many builds.
pub struct MappingCompiler<'a> {
    registry: &'a TypeRegistry,
    metadata: &'a dyn MetadataProvider,
    bridges: &'a BridgeFactory,
    settings: Settings,
}

impl<'a> MappingCompiler<'a> {
    pub fn new(
        registry: &'a TypeRegistry,
        metadata: &'a dyn MetadataProvider,
        bridges: &'a BridgeFactory,
    ) -> Self {
        Self {
            registry,
            metadata,
            bridges,
            settings: Settings::default(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Build the mapping for `root`.
    pub fn build(&self, root: &str) -> Result<Compiled, CompileError> {
        let ty = self.registry.get(root)?;

        let mut mapping = DocumentMapping::new(root);
        mapping.boost = self.metadata.type_boost(ty);
        mapping.index_name = Some(
            self.metadata
                .indexed(ty)
                .and_then(|decl| decl.index)
                .filter(|index| !index.is_empty())
                .unwrap_or_else(|| root.to_string()),
        );

        let mut build = Build {
            compiler: self,
            root,
            diagnostics: Diagnostics::default(),
        };
        let context = Traversal::root(root, self.settings.max_depth);
        build.build_class(&mut mapping, &context)?;

        mapping.filter_definitions = self.metadata.filters(ty);

        if mapping.document_id.is_none() && self.settings.require_document_id {
            return Err(CompileError::MissingIdentifier(root.to_string()));
        }

        tracing::debug!(
            "Compiled {root}: {} field(s), {} embedded, {} diagnostic(s)",
            mapping.fields.len(),
            mapping.embedded.len(),
            build.diagnostics.len()
        );

        Ok(Compiled {
            mapping,
            diagnostics: build.diagnostics,
        })
    }
}

/// State for a single build.
struct Build<'c, 'a> {
    compiler: &'c MappingCompiler<'a>,
    root: &'c str,
    diagnostics: Diagnostics,
}

impl Build<'_, '_> {
    fn metadata(&self) -> &dyn MetadataProvider {
        self.compiler.metadata
    }

    /// Walk the mapped type's hierarchy base first, adding each level's class
    /// bridges and its own declared members.
    fn build_class(
        &mut self,
        mapping: &mut DocumentMapping,
        context: &Traversal,
    ) -> Result<(), CompileError> {
        let hierarchy = self.compiler.registry.hierarchy(&mapping.mapped_type)?;

        for ty in hierarchy {
            // A document level analyzer wins over the one declared by a class.
            let local = self.type_analyzer(ty)?;
            let analyzer = mapping.analyzer.clone().or(local);

            let mut class_bridges = self.class_bridges(ty, analyzer.as_ref())?;
            assign_parameters(
                &ty.name,
                self.metadata().type_field_bridge(ty).is_some(),
                self.metadata().bridge_parameters(ty),
                &mut class_bridges,
                &mut self.diagnostics,
            );
            mapping.class_bridges.extend(class_bridges);

            for member in ty.members_in_visit_order() {
                if !self.metadata().is_mapped(ty, member) {
                    continue;
                }
                tracing::trace!("Visiting {}.{} at {:?}", ty.name, member.name, context.path);
                self.build_member(mapping, ty, member, analyzer.as_ref(), context)?;
            }
        }

        Ok(())
    }

    fn build_member(
        &mut self,
        mapping: &mut DocumentMapping,
        owner: &TypeDescriptor,
        member: &MemberDescriptor,
        parent_analyzer: Option<&Analyzer>,
        context: &Traversal,
    ) -> Result<(), CompileError> {
        let analyzer = match self.member_analyzer(owner, member)? {
            Some(analyzer) => Some(analyzer),
            None => parent_analyzer.cloned(),
        };
        let boost = self.metadata().member_boost(owner, member);
        let getter = resolve_accessor(owner, member)?;

        let mut id_bridge = None;
        if let Some(id) = self.metadata().document_id(owner, member) {
            let name = non_empty(id.name).unwrap_or_else(|| member.name.clone());
            let bridge = self.field_bridge(owner, member)?;

            if context.is_root {
                if let Some(existing) = &mapping.document_id {
                    return Err(CompileError::DuplicateIdentifier {
                        type_name: mapping.mapped_type.clone(),
                        first: existing.member.clone(),
                        member: member.name.clone(),
                    });
                }
                if !bridge.is_two_way() {
                    return Err(CompileError::BridgeCapability {
                        type_name: owner.name.clone(),
                        member: member.name.clone(),
                        bridge: bridge.name().to_string(),
                    });
                }
                mapping.document_id = Some(DocumentIdMapping {
                    name,
                    member: member.name.clone(),
                    bridge: bridge.clone(),
                    getter: getter.clone(),
                    boost,
                });
            } else {
                // Embedded ids are indexed like any stored keyword field.
                mapping.fields.push(FieldMapping {
                    name,
                    bridge: bridge.clone(),
                    getter: getter.clone(),
                    store: Store::Yes,
                    index: Index::Untokenized,
                    boost,
                    analyzer: None,
                });
            }
            id_bridge = Some(bridge);
        }

        let fields = self.metadata().fields(owner, member);
        if !fields.is_empty() {
            let bridge = match id_bridge {
                Some(bridge) => bridge,
                None => self.field_bridge(owner, member)?,
            };
            for decl in fields {
                let field_analyzer = match decl.analyzer.as_deref() {
                    Some(name) => Some(self.compiler.bridges.analyzer(name)?),
                    None => analyzer.clone(),
                };
                mapping.fields.push(FieldMapping {
                    name: non_empty(decl.name).unwrap_or_else(|| member.name.clone()),
                    bridge: bridge.clone(),
                    getter: getter.clone(),
                    store: decl.store,
                    index: decl.index,
                    boost,
                    analyzer: field_analyzer,
                });
            }
        }

        if let Some(decl) = self.metadata().embedded(owner, member) {
            self.build_embedded(mapping, owner, member, &decl, &getter, boost, analyzer, context)?;
        }

        if self.metadata().contained_in(owner, member) {
            mapping.contained_in.push(ContainedInMapping { getter });
        }

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn build_embedded(
        &mut self,
        mapping: &mut DocumentMapping,
        owner: &TypeDescriptor,
        member: &MemberDescriptor,
        decl: &EmbeddedDeclaration,
        getter: &Getter,
        boost: Option<f32>,
        analyzer: Option<Analyzer>,
        context: &Traversal,
    ) -> Result<(), CompileError> {
        let prefix = if decl.prefix == DEFAULT_PREFIX {
            format!("{}.", member.name)
        } else {
            decl.prefix.clone()
        };

        let target = match &decl.target_element {
            Some(target) => target.clone(),
            None => match member.value_type.element_type() {
                ValueType::Object(name) => name.clone(),
                other => {
                    return Err(CompileError::InvalidEmbedding {
                        type_name: owner.name.clone(),
                        member: member.name.clone(),
                        value_type: other.to_string(),
                    })
                }
            },
        };

        let child = context.embed(decl.depth, &prefix);

        if child.is_cycle(&target) {
            return Err(CompileError::CircularReference {
                type_name: target,
                root: self.root.to_string(),
                path: child.path,
            });
        }

        if !child.within_bound() {
            self.diagnostics
                .debug(&owner.name, format!("Depth reached, ignoring {}", child.path));
            return Ok(());
        }

        let mut nested = DocumentMapping::new(target.as_str());
        nested.boost = boost;
        nested.analyzer = analyzer;
        self.build_class(&mut nested, &child.enter(&target))?;

        mapping.embedded.push(EmbeddedMapping {
            mapping: nested,
            getter: getter.clone(),
            prefix,
            is_collection: getter.is_collection(),
        });

        Ok(())
    }

    fn class_bridges(
        &self,
        ty: &TypeDescriptor,
        analyzer: Option<&Analyzer>,
    ) -> Result<Vec<ClassBridgeMapping>, CompileError> {
        self.metadata()
            .class_bridges(ty)
            .into_iter()
            .map(|decl| -> Result<ClassBridgeMapping, CompileError> {
                let bridge = self.compiler.bridges.instantiate(&decl.bridge)?;
                let analyzer = match decl.analyzer.as_deref() {
                    Some(name) => Some(self.compiler.bridges.analyzer(name)?),
                    None => analyzer.cloned(),
                };
                Ok(ClassBridgeMapping {
                    name: non_empty(decl.name),
                    bridge,
                    boost: decl.boost,
                    index: decl.index,
                    store: decl.store,
                    analyzer,
                    parameters: Default::default(),
                })
            })
            .collect()
    }

    fn field_bridge(
        &self,
        owner: &TypeDescriptor,
        member: &MemberDescriptor,
    ) -> Result<Bridge, CompileError> {
        let explicit = self.metadata().field_bridge(owner, member);
        let bridge = self.compiler.bridges.guess(
            &format!("{}.{}", owner.name, member.name),
            &member.value_type,
            explicit.as_deref(),
            self.metadata().date_bridge(owner, member),
        )?;
        Ok(bridge)
    }

    fn type_analyzer(&self, ty: &TypeDescriptor) -> Result<Option<Analyzer>, CompileError> {
        self.metadata()
            .type_analyzer(ty)
            .map(|name| self.compiler.bridges.analyzer(&name))
            .transpose()
            .map_err(CompileError::from)
    }

    fn member_analyzer(
        &self,
        owner: &TypeDescriptor,
        member: &MemberDescriptor,
    ) -> Result<Option<Analyzer>, CompileError> {
        self.metadata()
            .member_analyzer(owner, member)
            .map(|name| self.compiler.bridges.analyzer(&name))
            .transpose()
            .map_err(CompileError::from)
    }
}

fn non_empty(name: Option<String>) -> Option<String> {
    name.filter(|n| !n.is_empty())
}
