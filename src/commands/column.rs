//! Column Commands

use serde::Serialize;

use super::{call, BoardIdArgs, IdArgs};
use crate::models::Column;

#[derive(Serialize)]
struct CreateColumnArgs<'a> {
    name: &'a str,
    #[serde(rename = "boardId")]
    board_id: u32,
}

pub async fn list_columns(board_id: u32) -> Result<Vec<Column>, String> {
    call("list_columns", &BoardIdArgs { board_id }).await
}

pub async fn get_column(id: u32) -> Result<Option<Column>, String> {
    call("get_column", &IdArgs { id }).await
}

pub async fn create_column(name: &str, board_id: u32) -> Result<Column, String> {
    call("create_column", &CreateColumnArgs { name, board_id }).await
}

pub async fn delete_column(id: u32) -> Result<Column, String> {
    call("delete_column", &IdArgs { id }).await
}
