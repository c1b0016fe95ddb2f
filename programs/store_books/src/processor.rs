use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::state::BuyAccount;

/// Record one purchase in the buy account
///
/// Every instruction is a purchase, so the instruction data is ignored.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    _instruction_data: &[u8],
) -> ProgramResult {
    msg!("Instruction: BuyBook");

    let accounts_iter = &mut accounts.iter();
    let buy_account = next_account_info(accounts_iter)?;

    // The program can only modify data of accounts it owns
    if buy_account.owner != program_id {
        msg!("Buy account does not have the correct program id");
        return Err(ProgramError::IncorrectProgramId);
    }

    let mut buy = BuyAccount::try_from_slice(&buy_account.data.borrow())?;
    buy.counter = buy
        .counter
        .checked_add(1)
        .ok_or(ProgramError::ArithmeticOverflow)?;
    buy.serialize(&mut &mut buy_account.data.borrow_mut()[..])?;

    msg!("Bought {} time(s)!", buy.counter);

    Ok(())
}
