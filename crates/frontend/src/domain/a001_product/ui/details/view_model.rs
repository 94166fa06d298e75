use leptos::prelude::*;

use contracts::domain::a001_product::aggregate::{Product, ProductForm};

use crate::domain::a001_product::api;

/// ViewModel for the product details form.
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(existing: Option<&Product>) -> Self {
        let form = match existing {
            Some(product) => ProductForm::from_product(product),
            None => ProductForm::default(),
        };
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.id.is_some())
    }

    /// Validate locally, then create or update depending on the form id.
    /// The caller's callback receives the decoded backend payload.
    pub fn save_command(&self, on_saved: Callback<Product>) {
        let current = self.form.get_untracked();

        if let Err(e) = current.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = match &current.id {
                Some(id) => api::update_product(id, &current).await,
                None => api::create_product(&current).await,
            };
            saving.set(false);
            match result {
                Ok(product) => on_saved.run(product),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
