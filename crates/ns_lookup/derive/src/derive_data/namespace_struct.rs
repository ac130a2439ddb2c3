use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, GenericParam, Ident, Type};

use crate::derive_data::{FieldAttributes, TypeAttributes};

/// A field that is part of the namespace, skipped fields excluded.
pub(crate) struct NamespaceField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

/// A struct with named fields deriving `Namespace`.
pub(crate) struct NamespaceStruct<'a> {
    ast: &'a DeriveInput,
    attrs: TypeAttributes,
    fields: Vec<NamespaceField<'a>>,
    ns_lookup_path: syn::Path,
}

impl<'a> NamespaceStruct<'a> {
    pub fn from_ast(ast: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new(
                ast.span(),
                "`Namespace` can only be derived for structs with named fields",
            ));
        };
        let Fields::Named(named) = &data.fields else {
            return Err(syn::Error::new(
                data.fields.span(),
                "`Namespace` can only be derived for structs with named fields",
            ));
        };

        if let Some(lifetime) = ast.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Namespace` cannot be derived for types with lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if field_attrs.skip.is_some() {
                continue;
            }
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            fields.push(NamespaceField {
                ident,
                ty: &field.ty,
                attrs: field_attrs,
            });
        }

        Ok(Self {
            ast,
            attrs,
            fields,
            ns_lookup_path: crate::path::ns_lookup(),
        })
    }

    #[inline]
    pub fn ast(&self) -> &'a DeriveInput {
        self.ast
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn fields(&self) -> &[NamespaceField<'a>] {
        &self.fields
    }

    #[inline]
    pub fn ns_lookup_path(&self) -> &syn::Path {
        &self.ns_lookup_path
    }

    /// The type parameters of the struct.
    pub fn type_params(&self) -> Vec<&'a Ident> {
        self.ast
            .generics
            .params
            .iter()
            .filter_map(|param| match param {
                GenericParam::Type(param) => Some(&param.ident),
                _ => None,
            })
            .collect()
    }
}
