//! FileReaderのPromise化

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, ProgressEvent};
use bharatvox_common::{Error, Result};

use crate::api::voice_detection::describe_js_error;

type Sender = Rc<RefCell<Option<oneshot::Sender<Result<String>>>>>;

fn complete(tx: &Sender, result: Result<String>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

/// ファイルをData URLとして読み込む
///
/// 読込完了/失敗のどちらか一方だけが返る。UIスレッドはブロックしない
pub async fn read_as_data_url(file: &File) -> Result<String> {
    let reader = FileReader::new().map_err(|e| Error::Read(describe_js_error(&e)))?;
    let (tx, rx) = oneshot::channel();
    let tx: Sender = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = Rc::clone(&tx);
        let reader = reader.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
            let result = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or_else(|| Error::Read("FileReader returned no data".to_string()));
            complete(&tx, result);
        })
    };

    let onerror = {
        let tx = Rc::clone(&tx);
        let reader = reader.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
            let reason = reader
                .error()
                .map(|e| e.message())
                .unwrap_or_else(|| "unknown read error".to_string());
            complete(&tx, Err(Error::Read(reason)));
        })
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| Error::Read(describe_js_error(&e)))?;

    let result = rx
        .await
        .unwrap_or_else(|_| Err(Error::Read("FileReader was dropped".to_string())));

    reader.set_onload(None);
    reader.set_onerror(None);
    result
}
