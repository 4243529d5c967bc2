use crate::domain::BidRecord;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, XlsxError};

fn cell_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Builds the workbook bytes for a list of bids, one row per bid.
pub fn bids_workbook(bids: &[BidRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = [
        "ID", "공고명", "발주기관", "분류", "지역", "예산(원)", "마감일", "등록일", "상태",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(cell_err("header"))?;
    }

    for (i, bid) in bids.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet.write_string(r, 0, &bid.id).map_err(cell_err("id"))?;
        worksheet.write_string(r, 1, &bid.title).map_err(cell_err("title"))?;
        worksheet.write_string(r, 2, &bid.agency).map_err(cell_err("agency"))?;
        worksheet.write_string(r, 3, &bid.category).map_err(cell_err("category"))?;
        worksheet.write_string(r, 4, &bid.region).map_err(cell_err("region"))?;
        worksheet
            .write_number(r, 5, bid.budget as f64)
            .map_err(cell_err("budget"))?;
        worksheet.write_string(r, 6, &bid.deadline).map_err(cell_err("deadline"))?;
        worksheet.write_string(r, 7, &bid.created_at).map_err(cell_err("created at"))?;
        worksheet
            .write_string(r, 8, bid.status.label())
            .map_err(cell_err("status"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_bids_xlsx(bids: &[BidRecord], filename: &str) -> ResultResp {
    let buffer = bids_workbook(bids)?;
    xlsx_response(buffer, filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::tests::scenario_bids;

    #[test]
    fn workbook_is_a_zip_container() {
        let bytes = bids_workbook(&scenario_bids()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn empty_list_still_produces_a_workbook() {
        assert!(!bids_workbook(&[]).unwrap().is_empty());
    }
}
