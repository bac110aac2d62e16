//! Class declarations.

use crate::checker::core::{Analyzer, not_hoisted};
use crate::checks;
use respecc_ast::{ClassDeclaration, Statement};
use respecc_core::{Result, ScopeId, Symbol};
use tracing::debug;

impl Analyzer {
    /// Creates the placeholder class and binds its name in `scope`.
    pub(crate) fn register_class(&mut self, class: &mut ClassDeclaration, scope: ScopeId) -> Result<()> {
        let id = self.registry.create_object(&class.name);
        let object_type = self.class_info(id)?.type_id;
        self.declare(scope, Symbol::class(&class.name, id, object_type), class.span)?;
        class.class_id = Some(id);
        Ok(())
    }

    /// Names phase: opens the body scope, hoists nested classes, methods and
    /// constructors, and pre-registers annotated fields as members.
    pub(crate) fn analyze_class_names(&mut self, class: &mut ClassDeclaration, scope: ScopeId) -> Result<()> {
        let id = class
            .class_id
            .ok_or_else(|| not_hoisted(&class.name, class.span))?;
        let body = self.scopes.child_for_class_body(scope, id);
        class.body_scope = Some(body);
        self.class_mut(id)?.body_scope = Some(body);

        self.hoist_declarations(&mut class.body.members, body)?;

        for member in &class.body.members {
            if let Statement::Variable(field) = member
                && let Some(annotation) = &field.type_annotation
            {
                let field_type = self.scopes.resolve_type(body, annotation, &mut self.registry)?;
                self.class_mut(id)?
                    .members
                    .insert(field.name.clone(), Symbol::variable(&field.name, field_type));
            }
        }
        Ok(())
    }

    /// Fields phase: declares the fields of a class and of its nested classes
    /// in textual order.
    ///
    /// Runs after all signatures are bound and before any function body, so
    /// every field, inferred or annotated, is a member wherever the class is
    /// used.
    pub(crate) fn analyze_class_fields(&mut self, class: &mut ClassDeclaration) -> Result<()> {
        let body = class
            .body_scope
            .ok_or_else(|| not_hoisted(&class.name, class.span))?;

        let mut fields = 0;
        for member in &mut class.body.members {
            match member {
                Statement::Variable(field) => {
                    self.analyze_variable(field, body)?;
                    fields += 1;
                }
                Statement::Class(nested) => self.analyze_class_fields(nested)?,
                _ => {}
            }
        }
        debug!(class = %class.name, fields, "Declared class fields");
        Ok(())
    }

    /// Full walk of the remaining class body, then member table and overload
    /// finalization. Fields were declared by the fields phase.
    pub(crate) fn analyze_class_body(&mut self, class: &mut ClassDeclaration) -> Result<()> {
        let (Some(id), Some(body)) = (class.class_id, class.body_scope) else {
            return Err(not_hoisted(&class.name, class.span));
        };
        debug!(class = %class.name, members = class.body.members.len(), "Analyzing class body");

        for member in &mut class.body.members {
            if !matches!(member, Statement::Variable(_)) {
                self.analyze_statement(member, body)?;
            }
        }

        let members = self.scopes.scope(body).symbols().clone();
        let info = self.class_mut(id)?;
        info.members = members;
        info.finalized = true;

        checks::no_ambiguous_constructors(&self.registry, self.class_info(id)?)?;
        class.overloads_validated = true;
        Ok(())
    }
}
