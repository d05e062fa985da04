//! Submit-time validation against form fixtures.

#![cfg(target_arch = "wasm32")]

mod common;

use pfe_web::behaviors::validation;
use wasm_bindgen_test::*;
use web_sys::HtmlInputElement;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_invalid_form_submission_is_cancelled() {
    common::mount_fixture(
        r#"
        <form class="needs-validation" novalidate>
            <input type="text" name="title" required>
        </form>
        "#,
    );
    let _listeners = validation::init(&common::document()).unwrap();
    let form = common::query("form.needs-validation");

    let proceeded = common::dispatch_cancelable(&form, "submit");

    assert!(!proceeded, "invalid submission must be prevented");
    assert!(form.class_list().contains("was-validated"));
}

#[wasm_bindgen_test]
fn test_valid_form_submission_proceeds() {
    common::mount_fixture(
        r#"
        <form class="needs-validation" novalidate>
            <input id="title-input" type="text" name="title" required>
        </form>
        "#,
    );
    let _listeners = validation::init(&common::document()).unwrap();
    common::query_as::<HtmlInputElement>("#title-input").set_value("Projet");
    let form = common::query("form.needs-validation");

    let proceeded = common::dispatch_cancelable(&form, "submit");

    assert!(proceeded, "valid submission must not be prevented");
    assert!(form.class_list().contains("was-validated"));
}

#[wasm_bindgen_test]
fn test_unmarked_form_is_left_alone() {
    common::mount_fixture(
        r#"
        <form id="plain">
            <input type="text" name="title" required>
        </form>
        "#,
    );
    let _listeners = validation::init(&common::document()).unwrap();
    let form = common::query("#plain");

    let proceeded = common::dispatch_cancelable(&form, "submit");

    assert!(proceeded);
    assert!(!form.class_list().contains("was-validated"));
}
