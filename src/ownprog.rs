//! On-disk program documents.
//!
//! A program document is a json description of a whole program: classes
//! with their hierarchy links, fields, methods and instruction bodies,
//! plus classification seeds and the reachable-methods snapshot of a
//! previous points-to run. Loading a document produces the scene and the
//! registries the transforms consume.

use crate::errors::{ObjsensError, ObjsensResult};
use os_ir::{
    Body, ClassFlags, FieldFlags, Instr, InvokeKind, IrError, MethodDescr, MethodFlags, MethodUid,
    Scene, Type,
};
use os_transform::{
    ApiRegistry, MethodClassification, ProjectRegistry, ReachableMethods, StringResults,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct ProgramDoc {
    #[serde(default)]
    pub classes: Vec<ClassDoc>,
    #[serde(default)]
    pub system_classes: Vec<String>,
    #[serde(default)]
    pub container_classes: Vec<String>,
    #[serde(default)]
    pub src_classes: Vec<String>,
    #[serde(default)]
    pub gen_classes: Vec<String>,
    #[serde(default)]
    pub lib_classes: Vec<String>,
    #[serde(default)]
    pub safe_methods: Vec<MethodRefDoc>,
    #[serde(default)]
    pub spec_methods: Vec<MethodRefDoc>,
    #[serde(default)]
    pub banned_methods: Vec<MethodRefDoc>,
    #[serde(default)]
    pub reachable: Vec<MethodRefDoc>,
}

#[derive(Debug, Deserialize)]
pub struct ClassDoc {
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default = "default_true")]
    pub application: bool,
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDoc>,
    #[serde(default)]
    pub methods: Vec<MethodDoc>,
}

#[derive(Debug, Deserialize)]
pub struct FieldDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MethodDoc {
    pub name: String,
    #[serde(default = "default_void")]
    pub returns: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub exceptions: Vec<String>,
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub body: Option<Vec<InstrDoc>>,
    #[serde(default)]
    pub phantom: bool,
    #[serde(default)]
    pub runtime_stub: bool,
}

/// Reference to a method by fully resolved signature.
#[derive(Debug, Deserialize)]
pub struct MethodRefDoc {
    pub class: String,
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default = "default_void")]
    pub returns: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum InstrDoc {
    Nop,
    Return,
    Invoke {
        kind: String,
        class: String,
        name: String,
        #[serde(default)]
        params: Vec<String>,
        #[serde(default = "default_void")]
        returns: String,
        #[serde(default)]
        nargs: usize,
    },
}

fn default_true() -> bool {
    true
}

fn default_void() -> String {
    "void".to_string()
}

/// Everything a program document expands to.
#[derive(Debug)]
pub struct LoadedProgram {
    pub scene: Scene,
    pub api: ApiRegistry,
    pub project: ProjectRegistry,
    pub reachable: ReachableMethods,
    pub strings: StringResults,
}

/// Reads and parses a program document file.
pub fn open<P: AsRef<Path>>(path: P) -> ObjsensResult<ProgramDoc> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Expands a program document into a scene and the registries the
/// transforms consume.
pub fn load(doc: &ProgramDoc) -> ObjsensResult<LoadedProgram> {
    let mut scene = Scene::new();

    // classes first, hierarchy links second: documents may declare a
    // subclass before its superclass
    for class_doc in &doc.classes {
        scene.new_class(
            &class_doc.name,
            class_flags(&class_doc.modifiers)?,
            None,
            class_doc.interfaces.clone(),
            class_doc.application,
        )?;
    }
    for class_doc in &doc.classes {
        if let Some(superclass) = &class_doc.superclass {
            let sup = scene.lookup_class(superclass)?.uid();
            let cuid = scene.lookup_class(&class_doc.name)?.uid();
            scene.set_superclass(cuid, Some(sup));
        }
    }
    scene.close_hierarchy()?;

    // declarations, bodies deferred: call sites reference methods by
    // resolved signature, so every method must exist first
    let mut pending_bodies: Vec<(MethodUid, &Vec<InstrDoc>)> = Vec::new();
    for class_doc in &doc.classes {
        let cuid = scene.lookup_class(&class_doc.name)?.uid();
        if !class_doc.type_params.is_empty() {
            scene[cuid].set_type_params(class_doc.type_params.clone());
        }
        for field_doc in &class_doc.fields {
            scene.new_field(
                cuid,
                &field_doc.name,
                field_doc.type_.parse()?,
                field_flags(&field_doc.modifiers)?,
            );
        }
        for method_doc in &class_doc.methods {
            let descriptor = MethodDescr::new(
                &method_doc.name,
                method_doc.returns.parse()?,
                parse_types(&method_doc.params)?,
            );
            let muid = scene.new_method(
                cuid,
                descriptor,
                method_flags(&method_doc.modifiers)?,
                method_doc.exceptions.clone(),
                method_doc.type_params.clone(),
                None,
            );
            scene.set_method_phantom(muid, method_doc.phantom);
            scene.set_method_runtime_stub(muid, method_doc.runtime_stub);
            if let Some(body) = &method_doc.body {
                pending_bodies.push((muid, body));
            }
        }
    }

    for (muid, body_doc) in pending_bodies {
        let mut instrs = Vec::new();
        for instr_doc in body_doc {
            instrs.push(match instr_doc {
                InstrDoc::Nop => Instr::Nop,
                InstrDoc::Return => Instr::Return,
                InstrDoc::Invoke {
                    kind,
                    class,
                    name,
                    params,
                    returns,
                    nargs,
                } => {
                    let target = resolve_method(&scene, class, name, params, returns)?;
                    Instr::Invoke(scene.new_invoke(invoke_kind(kind)?, target, *nargs))
                }
            });
        }
        scene[muid].set_body(Body::new(instrs));
    }

    let mut api = ApiRegistry::new();
    for name in &doc.system_classes {
        api.add_system_class(name);
    }
    for name in &doc.container_classes {
        api.add_container_class(name);
    }
    for (refs, classification) in [
        (&doc.safe_methods, MethodClassification::Safe),
        (&doc.spec_methods, MethodClassification::Spec),
        (&doc.banned_methods, MethodClassification::Banned),
    ] {
        for mref in refs {
            let muid = resolve_method(&scene, &mref.class, &mref.name, &mref.params, &mref.returns)?;
            api.set_classification(muid, classification);
        }
    }

    let mut project = ProjectRegistry::new();
    for name in &doc.src_classes {
        project.add_src_class(name);
    }
    for name in &doc.gen_classes {
        project.add_gen_class(name);
    }
    for name in &doc.lib_classes {
        project.add_lib_class(name);
    }

    let mut reachable = Vec::new();
    for mref in &doc.reachable {
        reachable.push(resolve_method(
            &scene,
            &mref.class,
            &mref.name,
            &mref.params,
            &mref.returns,
        )?);
    }

    Ok(LoadedProgram {
        scene,
        api,
        project,
        reachable: ReachableMethods::snapshot(reachable),
        strings: StringResults::new(),
    })
}

fn parse_types(descrs: &[String]) -> ObjsensResult<Vec<Type>> {
    descrs.iter().map(|d| Ok(d.parse::<Type>()?)).collect()
}

fn resolve_method(
    scene: &Scene,
    class: &str,
    name: &str,
    params: &[String],
    returns: &str,
) -> ObjsensResult<MethodUid> {
    let class = scene.lookup_class(class)?;
    let return_type: Type = returns.parse()?;
    let params = parse_types(params)?;
    class
        .get_method(name, &return_type, &params, scene)
        .map(os_ir::Method::uid)
        .ok_or_else(|| IrError::MethodNotFound(format!("{}->{name}", class.name())).into())
}

fn class_flags(modifiers: &[String]) -> ObjsensResult<ClassFlags> {
    let mut flags = ClassFlags::empty();
    for modifier in modifiers {
        flags |= match modifier.as_str() {
            "public" => ClassFlags::ACC_PUBLIC,
            "private" => ClassFlags::ACC_PRIVATE,
            "protected" => ClassFlags::ACC_PROTECTED,
            "static" => ClassFlags::ACC_STATIC,
            "final" => ClassFlags::ACC_FINAL,
            "interface" => ClassFlags::ACC_INTERFACE,
            "abstract" => ClassFlags::ACC_ABSTRACT,
            "enum" => ClassFlags::ACC_ENUM,
            other => {
                return Err(ObjsensError::BadDocument(format!(
                    "unknown class modifier: {other}"
                )))
            }
        };
    }
    Ok(flags)
}

fn method_flags(modifiers: &[String]) -> ObjsensResult<MethodFlags> {
    let mut flags = MethodFlags::empty();
    for modifier in modifiers {
        flags |= match modifier.as_str() {
            "public" => MethodFlags::ACC_PUBLIC,
            "private" => MethodFlags::ACC_PRIVATE,
            "protected" => MethodFlags::ACC_PROTECTED,
            "static" => MethodFlags::ACC_STATIC,
            "final" => MethodFlags::ACC_FINAL,
            "synchronized" => MethodFlags::ACC_SYNCHRONIZED,
            "bridge" => MethodFlags::ACC_BRIDGE,
            "varargs" => MethodFlags::ACC_VARARGS,
            "native" => MethodFlags::ACC_NATIVE,
            "abstract" => MethodFlags::ACC_ABSTRACT,
            "constructor" => MethodFlags::ACC_CONSTRUCTOR,
            other => {
                return Err(ObjsensError::BadDocument(format!(
                    "unknown method modifier: {other}"
                )))
            }
        };
    }
    Ok(flags)
}

fn field_flags(modifiers: &[String]) -> ObjsensResult<FieldFlags> {
    let mut flags = FieldFlags::empty();
    for modifier in modifiers {
        flags |= match modifier.as_str() {
            "public" => FieldFlags::ACC_PUBLIC,
            "private" => FieldFlags::ACC_PRIVATE,
            "protected" => FieldFlags::ACC_PROTECTED,
            "static" => FieldFlags::ACC_STATIC,
            "final" => FieldFlags::ACC_FINAL,
            "volatile" => FieldFlags::ACC_VOLATILE,
            "transient" => FieldFlags::ACC_TRANSIENT,
            other => {
                return Err(ObjsensError::BadDocument(format!(
                    "unknown field modifier: {other}"
                )))
            }
        };
    }
    Ok(flags)
}

fn invoke_kind(kind: &str) -> ObjsensResult<InvokeKind> {
    match kind {
        "virtual" => Ok(InvokeKind::Virtual),
        "special" => Ok(InvokeKind::Special),
        "static" => Ok(InvokeKind::Static),
        other => Err(ObjsensError::BadDocument(format!(
            "unknown invoke kind: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use os_transform::ClassCloner;

    const DOC: &str = r#"{
        "classes": [
            {
                "name": "com/example/Base",
                "modifiers": ["public"],
                "fields": [
                    { "name": "state", "type": "int", "modifiers": ["private", "final"] }
                ],
                "methods": [
                    {
                        "name": "update",
                        "params": ["int"],
                        "modifiers": ["public"],
                        "body": [ { "op": "return" } ]
                    }
                ]
            },
            {
                "name": "com/example/Widget",
                "modifiers": ["public", "final"],
                "superclass": "com/example/Base",
                "methods": [
                    {
                        "name": "render",
                        "modifiers": ["public"],
                        "body": [
                            {
                                "op": "invoke",
                                "kind": "special",
                                "class": "com/example/Base",
                                "name": "update",
                                "params": ["int"],
                                "nargs": 1
                            },
                            { "op": "return" }
                        ]
                    }
                ]
            }
        ],
        "src_classes": ["com/example/Widget"],
        "reachable": [
            { "class": "com/example/Base", "name": "update", "params": ["int"] }
        ]
    }"#;

    #[test]
    fn document_expands_to_scene_and_registries() {
        let doc: ProgramDoc = serde_json::from_str(DOC).unwrap();
        let program = load(&doc).unwrap();

        let base = program.scene.lookup_class("com/example/Base").unwrap();
        let widget = program.scene.lookup_class("com/example/Widget").unwrap();
        assert_eq!(widget.superclass(), Some(base.uid()));
        assert!(widget.is_final());
        assert_eq!(program.reachable.len(), 1);
        assert!(program.project.is_src_class("com/example/Widget"));
        // orphans were linked to the root type
        assert_eq!(
            base.superclass(),
            program.scene.class_uid(os_ir::JAVA_LANG_OBJECT)
        );
    }

    #[test]
    fn cyclic_superclass_links_are_rejected() {
        let doc: ProgramDoc = serde_json::from_str(
            r#"{
                "classes": [
                    { "name": "pkg/A", "superclass": "pkg/B" },
                    { "name": "pkg/B", "superclass": "pkg/A" }
                ]
            }"#,
        )
        .unwrap();
        let err = load(&doc).unwrap_err();
        assert!(matches!(
            err,
            ObjsensError::Ir(os_ir::IrError::CyclicHierarchy(_))
        ));
    }

    #[test]
    fn loaded_program_supports_cloning() {
        let doc: ProgramDoc = serde_json::from_str(DOC).unwrap();
        let mut program = load(&doc).unwrap();
        let widget = program.scene.lookup_class("com/example/Widget").unwrap().uid();

        let mut cloner = ClassCloner::new(
            &mut program.scene,
            &mut program.api,
            &mut program.project,
            &program.reachable,
            &mut program.strings,
        );
        let handle = cloner.clone_class(widget).unwrap();

        let clone = &program.scene[handle.cloned_class()];
        assert_eq!(clone.superclass(), Some(widget));
        // render from Widget, update from Base
        assert_eq!(clone.method_uids().len(), 2);
        assert_eq!(handle.reachable_cloned_methods().len(), 1);
        assert!(program.project.is_src_class(clone.name()));
    }
}
