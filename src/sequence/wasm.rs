//! WASM bindings for the sequence module.
//!
//! This module provides a JavaScript-friendly wrapper around [`Sequence`]
//! for use in browser environments.

use js_sys::Array;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::error::SequenceError;
use super::list::Sequence;

// =============================================================================
// ERROR CONVERSION
// =============================================================================

impl From<SequenceError> for JsValue {
    fn from(err: SequenceError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Helper macro for Result conversion
macro_rules! js_result {
    ($expr:expr) => {
        $expr.map_err(|e: SequenceError| JsValue::from(e))
    };
}

// =============================================================================
// MAIN WRAPPER TYPE
// =============================================================================

/// JavaScript-friendly wrapper around `Sequence`.
#[wasm_bindgen]
pub struct JsSequence {
    inner: Sequence,
}

#[wasm_bindgen]
impl JsSequence {
    /// Creates a new empty sequence.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const seq = new JsSequence();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsSequence {
        JsSequence {
            inner: Sequence::new(),
        }
    }

    /// Builds a sequence from an array of strings.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const seq = JsSequence.fromArray(['c', 'a', 'b']);
    /// ```
    #[wasm_bindgen(js_name = fromArray)]
    pub fn from_array(items: JsValue) -> Result<JsSequence, JsValue> {
        let items: Vec<String> = from_value(items)?;
        Ok(JsSequence {
            inner: Sequence::from_array(&items),
        })
    }

    /// Returns the elements as a JavaScript array of strings.
    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Array {
        self.inner.iter().map(JsValue::from_str).collect()
    }

    /// Returns the elements as a plain JS value (via serde).
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.inner.to_array())?)
    }

    /// Renders as `( e1 e2 ... en )`.
    pub fn render(&self) -> String {
        self.inner.render()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn length(&self) -> usize {
        self.inner.len()
    }

    pub fn contains(&self, element: &str) -> bool {
        self.inner.contains(element)
    }

    /// Gets the element at `index`; negative or too-large indices throw.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// try {
    ///   seq.get(5);
    /// } catch (e) {
    ///   console.log(e); // "Index 5 out of range for sequence of length 3"
    /// }
    /// ```
    pub fn get(&self, index: i32) -> Result<String, JsValue> {
        let position = usize::try_from(index)
            .map_err(|_| SequenceError::out_of_range(index, self.inner.len()))?;
        let element = js_result!(self.inner.get(position))?;
        Ok(element.to_owned())
    }
}

// =============================================================================
// MUTATION METHODS
// =============================================================================

#[wasm_bindgen]
impl JsSequence {
    #[wasm_bindgen(js_name = addToFront)]
    pub fn add_to_front(&mut self, element: &str) {
        self.inner.add_to_front(element);
    }

    #[wasm_bindgen(js_name = addToBack)]
    pub fn add_to_back(&mut self, element: &str) {
        self.inner.add_to_back(element);
    }

    /// Removes and returns the first element; throws on an empty sequence.
    #[wasm_bindgen(js_name = removeFront)]
    pub fn remove_front(&mut self) -> Result<String, JsValue> {
        js_result!(self.inner.remove_front())
    }

    /// Appends copies of every element of `other`; `other` is unchanged.
    #[wasm_bindgen(js_name = appendAllCopy)]
    pub fn append_all_copy(&mut self, other: &JsSequence) {
        self.inner.append_all_copy(&other.inner);
    }

    pub fn reverse(&mut self) {
        self.inner.reverse();
    }

    /// Splits off and returns the back half.
    pub fn split(&mut self) -> JsSequence {
        JsSequence {
            inner: self.inner.split(),
        }
    }

    /// Merges sorted `other` into this sorted sequence, emptying `other`.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const a = JsSequence.fromArray(['a', 'c']);
    /// const b = JsSequence.fromArray(['b', 'd']);
    /// a.merge(b);
    /// console.log(a.render()); // "( a b c d )"
    /// console.log(b.length()); // 0
    /// ```
    pub fn merge(&mut self, other: &mut JsSequence) {
        self.inner.merge(&mut other.inner);
    }

    #[wasm_bindgen(js_name = mergeSort)]
    pub fn merge_sort(&mut self) {
        self.inner.merge_sort();
    }

    pub fn equals(&self, other: &JsSequence) -> bool {
        self.inner == other.inner
    }
}

impl Default for JsSequence {
    fn default() -> Self {
        Self::new()
    }
}
